//! Keystroke feed: translates raw crossterm events into the abstract
//! keys the session understands. Polling is non-blocking; no pending
//! input just means "no key this tick".

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::core::session::SessionKey;

/// TUI-level input events. Session keys pass through to the core;
/// `Resize` only forces a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Key(SessionKey),
    Resize,
}

/// Poll for one event, waiting at most `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

/// Block until any key is pressed (splash screen dismissal).
pub fn wait_for_any_key() -> std::io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(());
        }
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            translate_key(key.code).map(TuiEvent::Key)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(code: KeyCode) -> Option<SessionKey> {
    match code {
        KeyCode::Char(' ') => Some(SessionKey::TogglePause),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(SessionKey::Quit),
        KeyCode::Up => Some(SessionKey::ScrollUp),
        KeyCode::Down => Some(SessionKey::ScrollDown),
        KeyCode::PageUp => Some(SessionKey::PageUp),
        KeyCode::PageDown => Some(SessionKey::PageDown),
        _ => None,
    }
}
