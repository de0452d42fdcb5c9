//! Terminal setup and teardown.
//!
//! The board runs in raw mode on the alternate screen with mouse capture on,
//! so the wheel can scroll the list. [`install_panic_hook`] puts the
//! terminal back before a panic message is printed.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::error::{Result, TerminalError};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Takes over the terminal for rendering.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if raw mode, the alternate screen or
/// the backend cannot be initialized.
///
/// # Examples
///
/// ```no_run
/// use idea_board_tui::terminal;
///
/// let mut terminal = terminal::setup_terminal().expect("failed to setup terminal");
/// terminal::restore_terminal(&mut terminal).expect("failed to restore terminal");
/// ```
pub fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(TerminalError::Setup)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Hands the terminal back: raw mode off, main screen, cursor visible.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if any step fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)?;
    Ok(())
}

/// Installs a panic hook that restores the terminal, then chains to the
/// previous hook.
///
/// Call once at startup, before [`setup_terminal`].
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best effort, the process is going down anyway
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
