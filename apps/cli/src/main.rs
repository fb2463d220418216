mod cli;
mod commands;
mod config;
mod main_lib;

use clap::Parser;
use cli::Cli;
use config::Config;
use main_lib::{build_state, init_tracing};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(config.log_format);
    let state = build_state(config);

    let stdout = std::io::stdout();
    commands::run(&state, cli.command, &mut stdout.lock())
}
