//! idea-board - a terminal client for the idea board service.
//!
//! This is the main binary: it loads the configuration, sets up file
//! logging, connects the HTTP client and runs the board.

mod logging;

use std::sync::Arc;

use anyhow::Context;
use idea_board_client::HttpIdeaApi;
use idea_board_config::Config;
use idea_board_tui::{App, terminal};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().await.context("failed to load configuration")?;

    // Held until exit so buffered log lines are flushed
    let _log_guard = logging::init_logging(&config.logging)?;

    let base_url = config.api.base_url()?;
    info!(%base_url, timeout = ?config.api.timeout(), "starting idea board");
    let api = HttpIdeaApi::new(base_url, config.api.timeout())?;

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;
    let mut app = App::new(Arc::new(api), config.branding.clone());

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
