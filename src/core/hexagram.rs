//! # Hexagram Codec
//!
//! Pure mapping from six cast bits to a symbolic identity: a King Wen
//! ordinal ("1".."64") plus the names of the upper and lower trigrams.
//!
//! Layout convention: a figure stores its lines bottom-to-top (index 0 is
//! the bottom line), but the King Wen table is keyed by the lines read
//! top-to-bottom. `HexagramFigure::king_wen_key` does that reversal in one
//! place so nothing else has to think about it.

use std::collections::HashMap;

use log::warn;

/// Returned when a table lookup misses. Should be unreachable for a
/// well-formed figure; casting must never abort the session over it.
pub const UNKNOWN_ID: &str = "?";

/// A single line of a hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineValue {
    /// Broken line (0).
    Yin,
    /// Solid line (1).
    Yang,
}

impl LineValue {
    pub fn from_bit(bit: u8) -> Self {
        if bit & 1 == 1 { LineValue::Yang } else { LineValue::Yin }
    }

    pub fn bit(self) -> u8 {
        match self {
            LineValue::Yin => 0,
            LineValue::Yang => 1,
        }
    }
}

/// Six lines, index 0 = bottom, index 5 = top. Immutable once cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexagramFigure {
    lines: [LineValue; 6],
}

impl HexagramFigure {
    pub fn new(lines: [LineValue; 6]) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> [LineValue; 6] {
        self.lines
    }

    /// Lines in display order, top line first.
    pub fn lines_top_down(&self) -> [LineValue; 6] {
        let mut lines = self.lines;
        lines.reverse();
        lines
    }

    /// Bottom three lines, read bottom-to-top.
    pub fn lower_trigram(&self) -> [LineValue; 3] {
        [self.lines[0], self.lines[1], self.lines[2]]
    }

    /// Top three lines, read bottom-to-top.
    pub fn upper_trigram(&self) -> [LineValue; 3] {
        [self.lines[3], self.lines[4], self.lines[5]]
    }

    /// The King Wen lookup key: line bits concatenated top line first.
    pub fn king_wen_key(&self) -> String {
        self.lines
            .iter()
            .rev()
            .map(|l| if l.bit() == 1 { '1' } else { '0' })
            .collect()
    }
}

/// The eight trigram operator names, keyed by (bottom, middle, top) bits.
const TRIGRAM_NAMES: [([u8; 3], &str); 8] = [
    ([1, 1, 1], "CONNECT"),
    ([0, 0, 0], "DISSOLVE"),
    ([1, 0, 0], "CHOOSE"),
    ([0, 1, 0], "ENCODE"),
    ([0, 0, 1], "LOGIC"),
    ([0, 1, 1], "OBSERVE"),
    ([1, 0, 1], "CYCLE"),
    ([1, 1, 0], "RUNTIME"),
];

/// King Wen table: six bits read top-to-bottom → ordinal "1".."64".
const KING_WEN: [(&str, &str); 64] = [
    ("111111", "1"), ("000000", "2"), ("100010", "3"), ("010001", "4"),
    ("111010", "5"), ("010111", "6"), ("010000", "7"), ("000010", "8"),
    ("111011", "9"), ("110111", "10"), ("111000", "11"), ("000111", "12"),
    ("101111", "13"), ("111101", "14"), ("001000", "15"), ("000100", "16"),
    ("100110", "17"), ("011001", "18"), ("110000", "19"), ("000011", "20"),
    ("100101", "21"), ("101001", "22"), ("000001", "23"), ("100000", "24"),
    ("100111", "25"), ("111001", "26"), ("100001", "27"), ("011110", "28"),
    ("010010", "29"), ("101101", "30"), ("001110", "31"), ("011100", "32"),
    ("001111", "33"), ("111100", "34"), ("000101", "35"), ("101000", "36"),
    ("101011", "37"), ("110101", "38"), ("001010", "39"), ("010100", "40"),
    ("110001", "41"), ("100011", "42"), ("111110", "43"), ("011111", "44"),
    ("000110", "45"), ("011000", "46"), ("010110", "47"), ("011010", "48"),
    ("101110", "49"), ("011101", "50"), ("100100", "51"), ("001001", "52"),
    ("001011", "53"), ("110100", "54"), ("101100", "55"), ("001101", "56"),
    ("011011", "57"), ("110110", "58"), ("010011", "59"), ("110010", "60"),
    ("110011", "61"), ("001100", "62"), ("101010", "63"), ("010101", "64"),
];

/// Name of a trigram, bits read bottom-to-top.
pub fn trigram_name(trigram: [LineValue; 3]) -> &'static str {
    let bits = [trigram[0].bit(), trigram[1].bit(), trigram[2].bit()];
    TRIGRAM_NAMES
        .iter()
        .find(|(key, _)| *key == bits)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_ID)
}

/// The result of one cast: figure plus everything derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub figure: HexagramFigure,
    /// King Wen ordinal "1".."64", or [`UNKNOWN_ID`] on a table miss.
    pub ordinal: &'static str,
    pub upper_trigram: &'static str,
    pub lower_trigram: &'static str,
}

/// Stateless codec over the fixed tables, built once at startup.
pub struct HexagramCodec {
    king_wen: HashMap<&'static str, &'static str>,
}

impl Default for HexagramCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl HexagramCodec {
    pub fn new() -> Self {
        Self {
            king_wen: KING_WEN.iter().copied().collect(),
        }
    }

    /// Resolve a figure to its identity. A table miss degrades to the
    /// `"?"` sentinel rather than failing.
    pub fn cast(&self, figure: HexagramFigure) -> Reading {
        let key = figure.king_wen_key();
        let ordinal = match self.king_wen.get(key.as_str()) {
            Some(ordinal) => *ordinal,
            None => {
                warn!("King Wen lookup miss for key {key}");
                UNKNOWN_ID
            }
        };
        Reading {
            figure,
            ordinal,
            upper_trigram: trigram_name(figure.upper_trigram()),
            lower_trigram: trigram_name(figure.lower_trigram()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn figure_from_bits(bits: [u8; 6]) -> HexagramFigure {
        HexagramFigure::new(bits.map(LineValue::from_bit))
    }

    #[test]
    fn all_64_figures_resolve_to_distinct_ordinals() {
        let codec = HexagramCodec::new();
        let mut seen = HashSet::new();
        for value in 0u8..64 {
            let bits = std::array::from_fn(|i| (value >> i) & 1);
            let reading = codec.cast(figure_from_bits(bits));
            assert_ne!(reading.ordinal, UNKNOWN_ID, "miss for bits {bits:?}");
            assert!(seen.insert(reading.ordinal), "duplicate ordinal {}", reading.ordinal);
        }
        assert_eq!(seen.len(), 64);
    }

    #[test]
    fn ordinals_cover_1_through_64() {
        let ordinals: HashSet<u8> = KING_WEN
            .iter()
            .map(|(_, id)| id.parse().expect("numeric ordinal"))
            .collect();
        assert_eq!(ordinals.len(), 64);
        assert!(ordinals.iter().all(|&n| (1..=64).contains(&n)));
    }

    #[test]
    fn all_8_trigrams_have_distinct_names() {
        let mut seen = HashSet::new();
        for value in 0u8..8 {
            let trigram = std::array::from_fn(|i| LineValue::from_bit(value >> i));
            let name = trigram_name(trigram);
            assert_ne!(name, UNKNOWN_ID);
            assert!(seen.insert(name), "duplicate trigram name {name}");
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn lookup_key_reads_top_to_bottom() {
        // Bottom line Yang, rest Yin: key reverses storage order.
        let figure = figure_from_bits([1, 0, 0, 0, 0, 0]);
        assert_eq!(figure.king_wen_key(), "000001");
        assert_eq!(HexagramCodec::new().cast(figure).ordinal, "23");
    }

    #[test]
    fn all_yang_is_hexagram_1() {
        let reading = HexagramCodec::new().cast(figure_from_bits([1; 6]));
        assert_eq!(reading.ordinal, "1");
        assert_eq!(reading.upper_trigram, "CONNECT");
        assert_eq!(reading.lower_trigram, "CONNECT");
    }

    #[test]
    fn all_yin_is_hexagram_2() {
        let reading = HexagramCodec::new().cast(figure_from_bits([0; 6]));
        assert_eq!(reading.ordinal, "2");
        assert_eq!(reading.upper_trigram, "DISSOLVE");
        assert_eq!(reading.lower_trigram, "DISSOLVE");
    }

    #[test]
    fn trigram_split_is_bottom_three_and_top_three() {
        let figure = figure_from_bits([1, 0, 0, 0, 1, 1]);
        assert_eq!(figure.lower_trigram().map(LineValue::bit), [1, 0, 0]);
        assert_eq!(figure.upper_trigram().map(LineValue::bit), [0, 1, 1]);
        let reading = HexagramCodec::new().cast(figure);
        assert_eq!(reading.lower_trigram, "CHOOSE");
        assert_eq!(reading.upper_trigram, "OBSERVE");
    }

    #[test]
    fn lines_top_down_reverses_storage_order() {
        let figure = figure_from_bits([1, 1, 1, 0, 0, 0]);
        assert_eq!(figure.lines_top_down().map(LineValue::bit), [0, 0, 0, 1, 1, 1]);
    }
}
