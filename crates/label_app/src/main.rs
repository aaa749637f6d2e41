mod cli;
mod config;
mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let mut config = config::AppConfig::load(cli.config.as_deref())?;
    config.apply_overrides(&cli);
    platform::run_app(config)
}
