mod app;
mod config;
mod consts;
mod error;
mod format;
mod input;
mod logging;
mod model;
mod random;
mod search;
mod session;
mod snowfall;
mod terminal;
mod timer;
mod ui;

use crate::app::App;
use crate::config::{Args, Config};
use crate::error::AppError;
use crate::terminal::TerminalGuard;
use clap::Parser;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from(Args::parse());
    let _log_guard = logging::init(&config.log_file, config.debug)?;

    let result = run(config);
    if let Err(err) = &result {
        tracing::error!(%err, "dashboard exited with an error");
    }
    result
}

fn run(config: Config) -> Result<(), AppError> {
    // Dropped on every return path, restoring the terminal before the
    // error reaches the shell.
    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(config);
    app.run(&mut terminal)
}
