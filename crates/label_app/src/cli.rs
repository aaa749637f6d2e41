use std::path::PathBuf;

use clap::Parser;

use crate::platform::logging::LogDestination;

/// Live label previews and printing against a label server.
#[derive(Debug, Parser)]
#[command(name = "label_app", version)]
pub struct Cli {
    /// RON configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the label server, e.g. http://127.0.0.1:5099
    #[arg(long)]
    pub server: Option<String>,

    /// Quiet period after the last edit before a preview is requested.
    #[arg(long = "debounce-ms")]
    pub debounce_ms: Option<u64>,

    /// Where log output goes.
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
}
