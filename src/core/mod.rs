//! # Core Oracle Logic
//!
//! Everything in this module is UI-agnostic: it knows nothing about
//! ratatui, crossterm, or the terminal at all. The `tui` adapter drives
//! it and renders what it emits.
//!
//! ```text
//!   entropy ──► hexagram ──┐
//!                          ├──► session ──► SessionFrame (plain data)
//!   deck ──► wrap ─────────┘
//! ```
//!
//! ## Modules
//!
//! - [`entropy`]: six uniform bits per cast, OS-randomness + SHA-256 with
//!   a PRNG fallback
//! - [`hexagram`]: figure → King Wen ordinal + trigram names
//! - [`wrap`]: width-aware greedy text wrapping
//! - [`session`]: the RUNNING/PAUSED tick state machine
//! - [`deck`]: the content database (JSON decks on the search paths)
//! - [`config`]: `~/.config/hexfetch/config.toml`

pub mod config;
pub mod deck;
pub mod entropy;
pub mod hexagram;
pub mod session;
pub mod wrap;
