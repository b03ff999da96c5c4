//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders each
//! [`SessionFrame`](crate::core::session::SessionFrame), and translates
//! keyboard events into the abstract keys the session understands.
//!
//! This is the only module tree that knows about ratatui and crossterm;
//! the core stays terminal-agnostic behind the frame/key contracts.
//!
//! ## Redraw strategy
//!
//! The loop ticks the session once per iteration:
//!
//! - **Running**: polls with a short timeout (~12fps) and redraws every
//!   tick, since each tick casts a new hexagram.
//! - **Paused**: polls with a longer timeout and redraws only on input
//!   or resize; the frame is static between keystrokes.
//!
//! All waiting happens here in the poll timeout — the session itself
//! never blocks.

pub mod event;
pub mod picker;
pub mod splash;
pub mod ui;

use std::time::Duration;

use crossterm::event::{Event, KeyEventKind};
use log::{info, warn};
use ratatui::layout::Rect;

use crate::core::config::{self, Config};
use crate::core::deck::{self, Deck};
use crate::core::session::{OracleSession, Tick};
use crate::tui::event::TuiEvent;
use crate::tui::picker::{DeckPickerState, PickerEvent};

/// Poll timeout while the flux is running (animation cadence).
const RUNNING_TICK: Duration = Duration::from_millis(80);
/// Poll timeout while paused (nothing moves without input).
const PAUSED_TICK: Duration = Duration::from_millis(250);

/// Run the oracle TUI until the user quits.
pub fn run(deck: &Deck) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, deck);
    ratatui::restore();
    result
}

fn run_loop(terminal: &mut ratatui::DefaultTerminal, deck: &Deck) -> std::io::Result<()> {
    terminal.draw(splash::draw)?;
    event::wait_for_any_key()?;

    let mut session = OracleSession::new(deck);
    let mut needs_redraw = true; // force the first frame

    loop {
        let timeout = if session.state().running {
            RUNNING_TICK
        } else {
            PAUSED_TICK
        };

        let key = match event::poll_event_timeout(timeout)? {
            Some(TuiEvent::Key(key)) => {
                needs_redraw = true;
                Some(key)
            }
            Some(TuiEvent::Resize) => {
                // The tick picks up the new viewport below; the session
                // re-wraps on its own when the width changed.
                needs_redraw = true;
                None
            }
            None => None,
        };

        let size = terminal.size()?;
        let viewport = ui::geometry(Rect::new(0, 0, size.width, size.height)).viewport();

        match session.tick(key, viewport) {
            Tick::Exit => {
                info!("session ended by user");
                return Ok(());
            }
            Tick::Frame(frame) => {
                if session.state().running || needs_redraw {
                    terminal.draw(|f| ui::draw_frame(f, &frame))?;
                    needs_redraw = false;
                }
            }
        }
    }
}

/// Run the configuration view: pick a default deck and save it.
pub fn run_options() -> std::io::Result<()> {
    let decks = deck::available_decks();
    let active = config::load_config()
        .default_deck
        .unwrap_or_else(|| "default".to_string());
    let mut state = DeckPickerState::new(decks, &active);

    let mut terminal = ratatui::init();
    let result = options_loop(&mut terminal, &mut state);
    ratatui::restore();
    result
}

fn options_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut DeckPickerState,
) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| state.render(f))?;

        let Event::Key(key) = crossterm::event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match state.handle_key(key.code) {
            Some(PickerEvent::Save(id)) => {
                let config = Config {
                    default_deck: Some(id.clone()),
                };
                match config::save_config(&config) {
                    Ok(()) => info!("default deck set to {id}"),
                    Err(e) => warn!("failed to save config: {e}"),
                }
                return Ok(());
            }
            Some(PickerEvent::Cancel) => return Ok(()),
            None => {}
        }
    }
}
