//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use idea_board_protocol::Message;

/// Default poll timeout for events.
///
/// Also bounds how long a finished request waits before the next frame
/// shows its outcome.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(Message::ScrollUp),
            MouseEventKind::ScrollDown => Some(Message::ScrollDown),
            _ => None,
        },
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound. Key releases are ignored.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Ctrl+U` | Clear the draft |
/// | `Ctrl+R` | Refresh the list |
/// | `Enter` | Submit the draft |
/// | `Backspace` | Delete the last draft character |
/// | `Up` / `Down` | Scroll the list |
/// | `F1` | Toggle help |
/// | `Esc` | Dismiss help |
/// | Any other character | Append to the draft |
/// | `Ctrl+Alt+char` (AltGr) | Append to the draft |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // AltGr arrives as Ctrl+Alt on some platforms and produces text
    if let KeyCode::Char(ch) = key.code
        && key.modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return Some(Message::Input { ch });
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            KeyCode::Char('u') => Some(Message::ClearDraft),
            KeyCode::Char('r') => Some(Message::Refresh),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Enter => Some(Message::Submit),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Up => Some(Message::ScrollUp),
        KeyCode::Down => Some(Message::ScrollDown),
        KeyCode::F(1) => Some(Message::ToggleHelp),
        // Alt chords are not text input
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(ch) => Some(Message::Input { ch }),
        _ => None,
    }
}
