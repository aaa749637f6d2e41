use label_core::Msg;

use super::constants::COMMAND_PREFIX;

/// What one line of terminal input asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Msg(Msg),
    Help,
    Unknown(String),
    Quit,
}

/// Line-oriented stand-in for the label textarea.
#[derive(Debug, Default)]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Interprets one line typed by the user.
    pub fn handle_line(&mut self, line: &str) -> InputEvent {
        let Some(command) = line.strip_prefix(COMMAND_PREFIX) else {
            self.lines.push(line.to_string());
            return self.changed();
        };

        let mut words = command.split_whitespace();
        match (words.next(), words.next()) {
            (Some("print"), None) => InputEvent::Msg(Msg::PrintClicked),
            (Some("full"), Some(state)) => match parse_toggle(state) {
                Some(on) => InputEvent::Msg(Msg::FullLabelToggled(on)),
                None => InputEvent::Unknown(line.to_string()),
            },
            (Some("small"), Some(state)) => match parse_toggle(state) {
                Some(on) => InputEvent::Msg(Msg::SmallLabelToggled(on)),
                None => InputEvent::Unknown(line.to_string()),
            },
            (Some("undo"), None) => {
                self.lines.pop();
                self.changed()
            }
            (Some("clear"), None) => {
                self.lines.clear();
                self.changed()
            }
            (Some("help"), None) => InputEvent::Help,
            (Some("quit"), None) => InputEvent::Quit,
            _ => InputEvent::Unknown(line.to_string()),
        }
    }

    fn changed(&self) -> InputEvent {
        InputEvent::Msg(Msg::InputChanged(self.text()))
    }
}

fn parse_toggle(word: &str) -> Option<bool> {
    match word {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}
