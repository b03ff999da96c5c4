//! One-shot text mode (`--text`): cast a single hexagram, print the
//! figure and its reading to stdout, exit. No loop, no TUI.

use colored::Colorize;

use crate::core::deck::{ContentEntry, Deck};
use crate::core::entropy::EntropySource;
use crate::core::hexagram::{HexagramCodec, HexagramFigure, LineValue, Reading};

/// Columns a bar spans in text mode (narrower than the TUI's).
const CLI_WIDTH: usize = 12;
const CLI_GAP: usize = 4;

const BAR_CHAR: &str = "━";
const RULE: &str = "------------------------------";

pub fn run(deck: &Deck) {
    let mut entropy = EntropySource::new();
    let codec = HexagramCodec::new();
    let reading = codec.cast(HexagramFigure::new(entropy.sample6()));
    let entry = deck.entry(reading.ordinal);

    let header = format!("HEXAGRAM #{}: {}", reading.ordinal, entry.name);
    println!("\n {}", header.cyan().bold());
    print!("{}", render_body(&reading, entry));
}

/// Everything below the colored header, as plain text.
pub fn render_body(reading: &Reading, entry: &ContentEntry) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    for line in reading.figure.lines_top_down() {
        out.push_str("   ");
        out.push_str(&bar(line));
        out.push('\n');
    }
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(" Upper: {}\n", reading.upper_trigram));
    out.push_str(&format!(" Lower: {}\n", reading.lower_trigram));
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&entry.meaning);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out
}

fn bar(line: LineValue) -> String {
    match line {
        LineValue::Yang => BAR_CHAR.repeat(CLI_WIDTH),
        LineValue::Yin => {
            let half = (CLI_WIDTH - CLI_GAP) / 2;
            format!(
                "{}{}{}",
                BAR_CHAR.repeat(half),
                " ".repeat(CLI_GAP),
                BAR_CHAR.repeat(half)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(bits: [u8; 6]) -> Reading {
        HexagramCodec::new().cast(HexagramFigure::new(bits.map(LineValue::from_bit)))
    }

    #[test]
    fn body_contains_trigrams_and_meaning() {
        let entry = ContentEntry {
            name: "THE INITIATOR".to_string(),
            meaning: "Pure creative force.".to_string(),
        };
        let body = render_body(&reading([1; 6]), &entry);
        assert!(body.contains("Upper: CONNECT"));
        assert!(body.contains("Lower: CONNECT"));
        assert!(body.contains("Pure creative force."));
    }

    #[test]
    fn yang_and_yin_bars_differ() {
        assert_eq!(bar(LineValue::Yang), BAR_CHAR.repeat(12));
        let yin = bar(LineValue::Yin);
        assert!(yin.contains("    "));
        assert_eq!(yin.chars().count(), 12);
    }

    #[test]
    fn figure_prints_top_line_first() {
        // Only the bottom line is Yang, so the last bar is the solid one.
        let entry = ContentEntry::placeholder();
        let body = render_body(&reading([1, 0, 0, 0, 0, 0]), &entry);
        let bars: Vec<&str> = body
            .lines()
            .filter(|l| l.starts_with("   "))
            .collect();
        assert_eq!(bars.len(), 6);
        assert!(bars[5].contains(&BAR_CHAR.repeat(12)));
        assert!(!bars[0].contains(&BAR_CHAR.repeat(12)));
    }
}
