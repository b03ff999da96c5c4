//! Splash screen: block-letter logo and key help, shown once before the
//! oracle loop starts. Dismissed by any key.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::VERSION;

const LOGO: [&str; 18] = [
    "╔══════════════════════════════════════════════════════════════╗",
    "║                                                              ║",
    "║   █   █  █████  ██   ██  █████  █████  █████  █████  █   █   ║",
    "║   █   █  █       ██ ██   █      █        █    █      █   █   ║",
    "║   █████  ████     ███    ████   ████     █    █      █████   ║",
    "║   █   █  █       ██ ██   █      █        █    █      █   █   ║",
    "║   █   █  █████  ██   ██  █      █████    █    █████  █   █   ║",
    "║                                                              ║",
    "╠══════════════════════════════════════════════════════════════╣",
    "║         [  P R O C E S S L A N G   O R A C L E  ]            ║",
    "╠══════════════════════════════════════════════════════════════╣",
    "║                                                              ║",
    "║   COMMANDS:                                                  ║",
    "║                                                              ║",
    "║   [ SPACE ] ....... CAST HEXAGRAM / PAUSE STREAM             ║",
    "║   [ ↑ / ↓ ] ....... SCROLL INTERPRETATION                    ║",
    "║   [   Q   ] ....... TERMINATE SESSION                        ║",
    "╚══════════════════════════════════════════════════════════════╝",
];

const PROMPT: &str = "[ PRESS ANY KEY TO INITIALIZE ]";

pub fn draw(frame: &mut Frame) {
    let area = frame.area();
    let start_y = (area.height / 2).saturating_sub(LOGO.len() as u16 / 2);

    for (i, text) in LOGO.iter().enumerate() {
        let y = start_y + i as u16;
        if y >= area.height {
            break;
        }
        let x = (area.width / 2).saturating_sub(text.chars().count() as u16 / 2);
        if x >= area.width {
            continue;
        }
        let rect = Rect::new(x, y, area.width - x, 1);
        frame.render_widget(Paragraph::new(colorize(text)), rect);
    }

    let prompt_y = start_y + LOGO.len() as u16 + 1;
    print_centered(
        frame,
        prompt_y,
        PROMPT.to_string(),
        Style::default().fg(Color::White).add_modifier(Modifier::SLOW_BLINK),
    );
    print_centered(
        frame,
        prompt_y + 2,
        format!("v{VERSION}"),
        Style::default().fg(Color::DarkGray),
    );
}

fn print_centered(frame: &mut Frame, y: u16, text: String, style: Style) {
    let area = frame.area();
    if y >= area.height {
        return;
    }
    let x = (area.width / 2)
        .saturating_sub(text.chars().count() as u16 / 2)
        .min(area.width.saturating_sub(1));
    let rect = Rect::new(x, y, area.width - x, 1);
    frame.render_widget(Paragraph::new(Line::styled(text, style)), rect);
}

/// Per-character styling: frame glyphs blue, block glyphs cyan, key
/// brackets yellow, everything else white. Runs of the same style are
/// merged into one span.
fn colorize(text: &str) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();

    for c in text.chars() {
        let style = match c {
            '╔' | '╗' | '╚' | '╝' | '║' | '═' | '╠' | '╣' => Style::default().fg(Color::Blue),
            '█' => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            '[' | ']' => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            _ => Style::default().fg(Color::White),
        };
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(c);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(draw).unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .flat_map(|y| {
                (0..width)
                    .map(move |x| (x, y))
                    .collect::<Vec<_>>()
            })
            .map(|(x, y)| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn splash_shows_commands_and_prompt() {
        let out = render(100, 30);
        assert!(out.contains("COMMANDS:"));
        assert!(out.contains("PRESS ANY KEY"));
    }

    #[test]
    fn splash_survives_a_tiny_terminal() {
        render(10, 3);
        render(1, 1);
    }
}
