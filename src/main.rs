// mixertable: a terminal list of 100 numbered rows.
// Select a row to check it and move it to the top; press s to shuffle.

mod app;
mod config;
mod error;
mod logging;
mod state;
mod ui;

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tracing::info;

use crate::app::{App, with_restore};
use crate::config::Config;

fn main() -> error::Result<()> {
    let (config, config_error) = Config::load_or_default();

    // The UI works without a log file
    let logging_error = logging::init(&config.log_filter).err();
    info!(title = %config.title, seed = ?config.seed, "starting");

    let mut app = App::new(&config);
    if let Some(e) = &logging_error {
        app.report_logging_error(e);
    }
    if let Some(e) = &config_error {
        app.report_config_error(e);
    }

    let mut terminal = ratatui::init();

    let result = with_restore(
        || execute!(stdout(), EnableMouseCapture),
        || app.run(&mut terminal),
        || {
            let _ = execute!(stdout(), DisableMouseCapture);
            ratatui::restore();
        },
    );

    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }
    info!("exiting");
    result.map_err(Into::into)
}
