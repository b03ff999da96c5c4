//! # Smart Wrap
//!
//! Pure text wrapping for the reading pane. Stateless helpers with no
//! dependency on the session or the terminal.
//!
//! The algorithm is a greedy fill with late breaking: characters
//! accumulate on the current line, and when one would overflow the target
//! width the line breaks at the last seen space (consuming it) if the
//! overflowing character is single-width, or hard-breaks right before the
//! character otherwise. Explicit newlines always start a new output line,
//! including empty ones, so blank paragraphs survive.
//!
//! Display width comes from `unicode-width`: wide/fullwidth characters
//! occupy two columns, everything else one. A double-width character is
//! never split across lines.

use unicode_width::UnicodeWidthChar;

/// Columns the character occupies in the terminal: 2 for wide/fullwidth
/// scripts, 1 for everything else.
pub fn char_display_width(c: char) -> usize {
    match c.width() {
        Some(2) => 2,
        _ => 1,
    }
}

/// Summed display width of a string.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_display_width).sum()
}

/// Wrap `text` into lines of display width at most `width` columns.
///
/// `width` must be at least 1; at least one character is placed per line
/// regardless, so a single character wider than `width` still lands on a
/// line of its own rather than being split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0usize;
        // Byte offset of the last space on the current line, if any.
        let mut last_space: Option<usize> = None;

        for c in paragraph.chars() {
            let w = char_display_width(c);
            if current_width + w > width {
                match last_space {
                    // Late break: cut at the space, carry the tail plus
                    // the new character onto the next line.
                    Some(space) if w == 1 => {
                        let mut carry = current.split_off(space);
                        carry.remove(0); // the space itself is consumed
                        carry.push(c);
                        lines.push(std::mem::replace(&mut current, carry));
                        current_width = display_width(&current);
                    }
                    // Hard break: no break point, or the overflowing
                    // character is double-width.
                    _ => {
                        lines.push(std::mem::take(&mut current));
                        current.push(c);
                        current_width = w;
                    }
                }
                last_space = None;
            } else {
                if c == ' ' {
                    last_space = Some(current.len());
                }
                current.push(c);
                current_width += w;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap("hello", 20), vec!["hello"]);
    }

    #[test]
    fn breaks_at_last_space() {
        assert_eq!(wrap("alpha beta gamma", 11), vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn break_consumes_the_space() {
        for line in wrap("one two three four five six", 9) {
            assert!(!line.starts_with(' '), "leading space in {line:?}");
            assert!(!line.ends_with(' '), "trailing space in {line:?}");
        }
    }

    #[test]
    fn carries_buffered_tail_after_the_space() {
        // "abcd ef" at width 6: 'g' overflows while "ef" sits after the
        // space, so the next line starts with the carried "ef" + 'g'.
        assert_eq!(wrap("abcd efg", 6), vec!["abcd", "efg"]);
    }

    #[test]
    fn hard_breaks_unbroken_run() {
        assert_eq!(wrap("aaaaaaaaaa", 4), vec!["aaaa", "aaaa", "aa"]);
    }

    #[test]
    fn explicit_newlines_start_new_lines() {
        assert_eq!(wrap("a\nb\nc", 10), vec!["a", "b", "c"]);
    }

    #[test]
    fn blank_paragraphs_are_preserved() {
        assert_eq!(wrap("first\n\nsecond", 10), vec!["first", "", "second"]);
    }

    #[test]
    fn empty_input_is_one_empty_line() {
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn width_bound_holds_for_mixed_content() {
        let text = "The 道 that can be named 名 is not the eternal 道, 非常道 indeed.";
        for width in 2..=30 {
            for line in wrap(text, width) {
                assert!(
                    display_width(&line) <= width,
                    "line {line:?} wider than {width}"
                );
            }
        }
    }

    #[test]
    fn double_width_run_hard_breaks_without_splitting() {
        // Five double-width chars at width 4: two per line, never split.
        assert_eq!(wrap("までまでま", 4), vec!["まで", "まで", "ま"]);
        for line in wrap("までまでま", 5) {
            assert!(display_width(&line) <= 5);
            // Odd width would mean a double-width character got split.
            assert_eq!(display_width(&line) % 2, 0);
        }
    }

    #[test]
    fn double_width_overflow_never_late_breaks() {
        // Overflowing char is wide, so even with a space available the
        // break is a hard break before the character.
        assert_eq!(wrap("ab 漢漢", 5), vec!["ab 漢", "漢"]);
    }

    #[test]
    fn reconstruction_preserves_non_whitespace_content() {
        let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        let text = "flux and form\nthe 過程 unfolds, 線 by 線\n\nnothing is lost";
        for width in 2..=24 {
            let joined = wrap(text, width).join(" ");
            assert_eq!(strip(&joined), strip(text), "width {width}");
        }
    }

    #[test]
    fn char_widths_match_east_asian_classes() {
        assert_eq!(char_display_width('a'), 1);
        assert_eq!(char_display_width(' '), 1);
        assert_eq!(char_display_width('é'), 1);
        assert_eq!(char_display_width('道'), 2);
        assert_eq!(char_display_width('ま'), 2);
        assert_eq!(char_display_width('Ｆ'), 2); // fullwidth latin
    }
}
