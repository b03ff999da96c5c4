//! # Decks
//!
//! The content database: interpretive text keyed by King Wen ordinal.
//! A deck is a JSON file mapping `"1".."64"` to name/meaning entries,
//! plus a `ui` object with prompt strings.
//!
//! Deck files are discovered across a fixed list of search paths. The
//! default deck is `data.json`; an alternate deck `NAME` lives in
//! `data_NAME.json`. Any load failure degrades to a built-in deck that
//! carries only the default UI strings, so the oracle runs regardless.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

/// One hexagram's display name and interpretive text. Opaque content:
/// the core never interprets it, only lays it out.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ContentEntry {
    #[serde(default = "unknown_name")]
    pub name: String,
    #[serde(default = "missing_meaning")]
    pub meaning: String,
}

impl ContentEntry {
    /// Stand-in for an ordinal the deck has no entry for.
    pub fn placeholder() -> Self {
        Self {
            name: unknown_name(),
            meaning: missing_meaning(),
        }
    }
}

impl Default for ContentEntry {
    fn default() -> Self {
        Self::placeholder()
    }
}

fn unknown_name() -> String {
    "UNKNOWN".to_string()
}

fn missing_meaning() -> String {
    "Data missing.".to_string()
}

/// UI prompt strings a deck may override.
#[derive(Debug, Clone, Deserialize)]
pub struct UiStrings {
    #[serde(default = "default_prompt_running")]
    pub prompt_running: String,
    #[serde(default = "default_prompt_paused")]
    pub prompt_paused: String,
    #[serde(default = "default_header_prefix")]
    pub header_prefix: String,
}

impl Default for UiStrings {
    fn default() -> Self {
        Self {
            prompt_running: default_prompt_running(),
            prompt_paused: default_prompt_paused(),
            header_prefix: default_header_prefix(),
        }
    }
}

fn default_prompt_running() -> String {
    ">> FLUX RUNNING <<".to_string()
}

fn default_prompt_paused() -> String {
    "[SPACE] RESTART [Q] QUIT".to_string()
}

fn default_header_prefix() -> String {
    "HEXAGRAM:".to_string()
}

/// A loaded content database. All hexagram entries besides `ui` sit at the
/// top level of the JSON file, keyed by ordinal, hence the flatten.
#[derive(Debug, Default, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub ui: UiStrings,
    #[serde(flatten)]
    entries: HashMap<String, ContentEntry>,
    #[serde(skip)]
    placeholder: ContentEntry,
}

impl Deck {
    pub fn get(&self, ordinal: &str) -> Option<&ContentEntry> {
        self.entries.get(ordinal)
    }

    /// Entry for the ordinal, degrading to the placeholder on a miss.
    pub fn entry(&self, ordinal: &str) -> &ContentEntry {
        match self.entries.get(ordinal) {
            Some(entry) => entry,
            None => {
                warn!("no deck entry for hexagram {ordinal}");
                &self.placeholder
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug)]
pub enum DeckError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Io(e) => write!(f, "deck I/O error: {e}"),
            DeckError::Parse(e) => write!(f, "deck parse error: {e}"),
        }
    }
}

impl std::error::Error for DeckError {}

/// Directories scanned for deck files, in priority order.
fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe) = std::env::current_exe()
        && let Some(dir) = exe.parent()
    {
        paths.push(dir.to_path_buf());
        paths.push(dir.join("decks"));
    }
    paths.push(PathBuf::from("/usr/share/hexfetch"));
    paths.push(PathBuf::from("/usr/share/hexfetch/decks"));
    if let Some(config) = dirs::config_dir() {
        paths.push(config.join("hexfetch"));
    }
    paths
}

fn deck_filename(deck_name: Option<&str>) -> String {
    match deck_name {
        Some(name) if name != "default" => format!("data_{name}.json"),
        _ => "data.json".to_string(),
    }
}

/// Locate a deck file on the search paths. A named deck that cannot be
/// found falls back to the default deck file.
pub fn find_deck_file(deck_name: Option<&str>) -> Option<PathBuf> {
    let filename = deck_filename(deck_name);
    for dir in search_paths() {
        let candidate = dir.join(&filename);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    if deck_name.is_some_and(|n| n != "default") {
        warn!("deck file {filename} not found, trying default deck");
        return find_deck_file(None);
    }
    None
}

/// Parse a deck from a specific file.
pub fn load_deck_file(path: &Path) -> Result<Deck, DeckError> {
    let contents = fs::read_to_string(path).map_err(DeckError::Io)?;
    serde_json::from_str(&contents).map_err(DeckError::Parse)
}

/// Load the named deck (or the configured/default deck for `None`).
/// Never fails: discovery or parse problems degrade to the built-in deck.
pub fn load_deck(deck_name: Option<&str>) -> Deck {
    let Some(path) = find_deck_file(deck_name) else {
        warn!("no deck file found on any search path, using built-in deck");
        return Deck::default();
    };
    match load_deck_file(&path) {
        Ok(deck) => {
            info!("loaded deck from {} ({} entries)", path.display(), deck.len());
            deck
        }
        Err(e) => {
            warn!("failed to load deck {}: {e}", path.display());
            Deck::default()
        }
    }
}

/// A deck available for selection in the options picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckInfo {
    /// Identifier used in config and `--deck` (e.g. "default", "tarot").
    pub id: String,
    /// Human-readable label shown in the picker.
    pub label: String,
}

/// Scan the search paths for selectable decks. The default deck is always
/// listed first, whether or not its file exists.
pub fn available_decks() -> Vec<DeckInfo> {
    let mut decks = vec![DeckInfo {
        id: "default".to_string(),
        label: "Standard Deck (data.json)".to_string(),
    }];
    for dir in search_paths() {
        let Ok(read_dir) = fs::read_dir(&dir) else {
            continue;
        };
        for entry in read_dir.flatten() {
            let filename = entry.file_name();
            let Some(filename) = filename.to_str() else {
                continue;
            };
            if let Some(id) = filename
                .strip_prefix("data_")
                .and_then(|rest| rest.strip_suffix(".json"))
                && !decks.iter().any(|d| d.id == id)
            {
                decks.push(DeckInfo {
                    id: id.to_string(),
                    label: format!("{} Deck ({filename})", id.to_uppercase()),
                });
            }
        }
    }
    decks
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "ui": {"prompt_running": ">> STREAMING <<"},
        "1": {"name": "THE INITIATOR", "meaning": "Pure creative force."},
        "2": {"name": "THE FIELD", "meaning": "Receptive ground."}
    }"#;

    #[test]
    fn parses_ui_and_entries() {
        let deck: Deck = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.entry("1").name, "THE INITIATOR");
        assert_eq!(deck.ui.prompt_running, ">> STREAMING <<");
        // Fields absent from the ui object keep their defaults
        assert_eq!(deck.ui.prompt_paused, "[SPACE] RESTART [Q] QUIT");
    }

    #[test]
    fn missing_ordinal_degrades_to_placeholder() {
        let deck: Deck = serde_json::from_str(SAMPLE).unwrap();
        assert!(deck.get("64").is_none());
        let entry = deck.entry("64");
        assert_eq!(entry.name, "UNKNOWN");
        assert_eq!(entry.meaning, "Data missing.");
    }

    #[test]
    fn entry_with_missing_fields_gets_defaults() {
        let deck: Deck = serde_json::from_str(r#"{"3": {"name": "SPROUT"}}"#).unwrap();
        assert_eq!(deck.entry("3").name, "SPROUT");
        assert_eq!(deck.entry("3").meaning, "Data missing.");
    }

    #[test]
    fn built_in_deck_is_empty_but_usable() {
        let deck = Deck::default();
        assert!(deck.is_empty());
        assert_eq!(deck.ui.prompt_running, ">> FLUX RUNNING <<");
        assert_eq!(deck.entry("1").name, "UNKNOWN");
    }

    #[test]
    fn deck_filenames() {
        assert_eq!(deck_filename(None), "data.json");
        assert_eq!(deck_filename(Some("default")), "data.json");
        assert_eq!(deck_filename(Some("tarot")), "data_tarot.json");
    }

    #[test]
    fn load_deck_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_test.json");
        fs::write(&path, SAMPLE).unwrap();
        let deck = load_deck_file(&path).unwrap();
        assert_eq!(deck.entry("2").name, "THE FIELD");
    }

    #[test]
    fn malformed_deck_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(load_deck_file(&path), Err(DeckError::Parse(_))));
    }
}
