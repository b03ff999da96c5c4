//! # hexfetch
//!
//! An interactive terminal oracle. Six bits of system entropy become a
//! hexagram, the hexagram becomes a King Wen ordinal, and the ordinal
//! keys into a deck of interpretive text rendered in a free-running
//! terminal animation with a paused, scrollable detail view.
//!
//! The [`core`] module is UI-agnostic (casting, wrapping, the tick state
//! machine); [`tui`] is the ratatui adapter driving it; [`cli`] is the
//! one-shot text mode.

pub mod cli;
pub mod core;
pub mod tui;

/// Crate version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
