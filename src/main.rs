mod cli;
mod color;
mod commands;
mod config;
mod error;
mod logging;
mod registry;
mod state;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::env::CompleteEnv;
use tracing::debug;

use cli::Cli;
use config::{ConfigStore, FixedPathLocator};
use error::{Error, Result};
use state::State;

fn main() -> ExitCode {
    // Handle dynamic completion via COMPLETE environment variable
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();

    let color_mode = color::ColorMode::resolve(cli.color);
    logging::init(color_mode.should_colorize());

    let registry = commands::registry();
    match run(&cli, &registry) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", color::error(color_mode, &err));
            if matches!(err, Error::CommandNotFound(_)) {
                eprintln!(
                    "{}",
                    color::warn(
                        color_mode,
                        format!("available commands: {}", registry.names().join(", "))
                    )
                );
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, registry: &registry::CommandRegistry<State>) -> Result<()> {
    let store = cli
        .config
        .as_ref()
        .map_or_else(ConfigStore::home, |path| {
            ConfigStore::new(FixedPathLocator::new(path))
        });
    debug!(path = ?store.locate_config_path().ok(), "reading config");
    let mut state = State::load(store)?;

    let command = cli.to_command();
    debug!(command = command.name(), args = command.args().len(), "dispatching");
    registry.run(&mut state, &command)
}
