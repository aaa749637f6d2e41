use std::time::Duration;

/// How often the main loop drains engine events when no input arrives.
pub const TICK_INTERVAL: Duration = Duration::from_millis(75);
/// Image sources longer than this are abbreviated in the terminal view.
pub const MAX_SRC_CHARS: usize = 48;
pub const COMMAND_PREFIX: char = ':';
pub const HELP_TEXT: &str = "\
Type label lines; each line is appended to the label text.
Commands:
  :print          print the current labels
  :full on|off    include the full-width label
  :small on|off   include the small label
  :undo           remove the last line
  :clear          clear all text
  :help           show this help
  :quit           exit";
