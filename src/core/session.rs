//! # Oracle Session
//!
//! The state machine driving the oracle. Two states, `RUNNING` and
//! `PAUSED`, advanced one tick at a time by the surrounding boundary.
//! Each tick consumes at most one abstract key, mutates the session, and
//! emits a [`SessionFrame`] — plain data the renderer turns into terminal
//! output. The session never names colors, key codes, or widgets.
//!
//! While running, every tick performs a fresh cast. While paused, the
//! interpretive text is wrapped once for the current viewport width and
//! scrolled with a clamped offset. Toggling pause in either direction
//! resets the scroll and drops the cached layout, so the next pause
//! recomputes fresh.
//!
//! Nothing in here blocks, and nothing in here is fatal: lookup misses
//! degrade to placeholders and the only way out of the loop is the
//! explicit quit key.

use log::debug;

use crate::core::deck::{ContentEntry, Deck};
use crate::core::entropy::EntropySource;
use crate::core::hexagram::{HexagramCodec, HexagramFigure, LineValue, Reading};
use crate::core::wrap;

/// Lines moved by a page-up/page-down key.
pub const PAGE_STEP: usize = 10;

/// Abstract keystroke, already translated from raw terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    TogglePause,
    Quit,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
}

/// The text region the boundary can devote to the reading pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Columns available for wrapped text.
    pub text_width: usize,
    /// Rows available for wrapped text.
    pub visible_rows: usize,
}

/// Wrapped layout cached for the duration of a pause. The width it was
/// computed for is kept so a resize invalidates it.
#[derive(Debug, Clone)]
struct WrapLayout {
    width: usize,
    lines: Vec<String>,
}

/// Everything the session owns across ticks. One owner, one mutator.
pub struct SessionState {
    pub running: bool,
    pub reading: Reading,
    pub entry: ContentEntry,
    pub scroll_offset: usize,
    layout: Option<WrapLayout>,
}

/// The paused half of a frame: title, visible text window, scroll hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PausedView {
    /// e.g. "HEXAGRAM #14: GREAT POSSESSION"
    pub title: String,
    /// The slice of wrapped lines currently in view.
    pub visible: Vec<String>,
    /// Scroll position 0–100, absent when the content fits without
    /// scrolling.
    pub scroll_percent: Option<u8>,
}

/// One tick's abstract output, derived fresh from the session state so a
/// dropped frame has no lasting effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFrame {
    /// Hexagram lines in display order, top line first.
    pub lines: [LineValue; 6],
    pub upper_trigram: &'static str,
    pub lower_trigram: &'static str,
    /// Prompt text for the bottom of the screen.
    pub prompt: String,
    /// Present only while paused.
    pub paused: Option<PausedView>,
}

/// Result of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    Frame(SessionFrame),
    /// The quit key was seen; the boundary should stop ticking.
    Exit,
}

pub struct OracleSession<'a> {
    deck: &'a Deck,
    entropy: EntropySource,
    codec: HexagramCodec,
    state: SessionState,
}

impl<'a> OracleSession<'a> {
    /// Start a session in `RUNNING` state with an implicit first cast.
    pub fn new(deck: &'a Deck) -> Self {
        let mut entropy = EntropySource::new();
        let codec = HexagramCodec::new();
        let reading = codec.cast(HexagramFigure::new(entropy.sample6()));
        let entry = lookup_entry(deck, reading.ordinal);
        Self {
            deck,
            entropy,
            codec,
            state: SessionState {
                running: true,
                reading,
                entry,
                scroll_offset: 0,
                layout: None,
            },
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Advance the session by one tick. `key` is this tick's pending
    /// keystroke, if any; absence of input is not an error.
    pub fn tick(&mut self, key: Option<SessionKey>, viewport: Viewport) -> Tick {
        if key == Some(SessionKey::Quit) {
            debug!("quit key received, ending session");
            return Tick::Exit;
        }

        if key == Some(SessionKey::TogglePause) {
            self.state.running = !self.state.running;
            self.state.scroll_offset = 0;
            self.state.layout = None;
            debug!(
                "session {}",
                if self.state.running { "resumed" } else { "paused" }
            );
        }

        if self.state.running {
            let figure = HexagramFigure::new(self.entropy.sample6());
            self.state.reading = self.codec.cast(figure);
            self.state.entry = lookup_entry(self.deck, self.state.reading.ordinal);
        } else {
            self.tick_paused(key, viewport);
        }

        Tick::Frame(self.frame(viewport))
    }

    fn tick_paused(&mut self, key: Option<SessionKey>, viewport: Viewport) {
        // Wrap once per pause, and again if the viewport width changed
        // (terminal resize) since the cached layout was computed.
        let stale = self
            .state
            .layout
            .as_ref()
            .is_none_or(|layout| layout.width != viewport.text_width);
        if stale {
            self.state.layout = Some(WrapLayout {
                width: viewport.text_width,
                lines: wrap::wrap(&self.state.entry.meaning, viewport.text_width.max(1)),
            });
        }

        match key {
            Some(SessionKey::ScrollUp) => {
                self.state.scroll_offset = self.state.scroll_offset.saturating_sub(1);
            }
            Some(SessionKey::ScrollDown) => {
                self.state.scroll_offset += 1;
            }
            Some(SessionKey::PageUp) => {
                self.state.scroll_offset = self.state.scroll_offset.saturating_sub(PAGE_STEP);
            }
            Some(SessionKey::PageDown) => {
                self.state.scroll_offset += PAGE_STEP;
            }
            _ => {}
        }

        self.state.scroll_offset = self.state.scroll_offset.min(self.max_scroll(viewport));
    }

    fn max_scroll(&self, viewport: Viewport) -> usize {
        self.state
            .layout
            .as_ref()
            .map_or(0, |layout| layout.lines.len().saturating_sub(viewport.visible_rows))
    }

    fn frame(&self, viewport: Viewport) -> SessionFrame {
        let paused = if self.state.running {
            None
        } else {
            Some(self.paused_view(viewport))
        };
        let prompt = if self.state.running {
            self.deck.ui.prompt_running.clone()
        } else {
            self.deck.ui.prompt_paused.clone()
        };
        SessionFrame {
            lines: self.state.reading.figure.lines_top_down(),
            upper_trigram: self.state.reading.upper_trigram,
            lower_trigram: self.state.reading.lower_trigram,
            prompt,
            paused,
        }
    }

    fn paused_view(&self, viewport: Viewport) -> PausedView {
        let lines: &[String] = self
            .state
            .layout
            .as_ref()
            .map_or(&[], |layout| layout.lines.as_slice());

        let offset = self.state.scroll_offset.min(lines.len());
        let end = (offset + viewport.visible_rows).min(lines.len());
        let visible = lines[offset..end].to_vec();

        // Suppressed when the content fits: there is nothing to scroll
        // and the percentage would divide by zero.
        let scroll_percent = if lines.len() > viewport.visible_rows {
            let max = lines.len() - viewport.visible_rows;
            Some((self.state.scroll_offset * 100 / max) as u8)
        } else {
            None
        };

        PausedView {
            title: format!(
                "{} #{}: {}",
                self.deck.ui.header_prefix.trim_end_matches(':'),
                self.state.reading.ordinal,
                self.state.entry.name
            ),
            visible,
            scroll_percent,
        }
    }
}

fn lookup_entry(deck: &Deck, ordinal: &str) -> ContentEntry {
    match deck.get(ordinal) {
        Some(entry) => entry.clone(),
        None => {
            // debug, not warn: a sparse deck would hit this on every
            // running tick
            debug!("deck has no entry for hexagram {ordinal}, using placeholder");
            ContentEntry::placeholder()
        }
    }
}
