//! Frame sink: turns a [`SessionFrame`] into ratatui widgets.
//!
//! Geometry is computed in one place so the tick's `Viewport` and the
//! draw pass always agree on how much room the reading pane has. All
//! positioned writes are clipped to the terminal area; a terminal too
//! small to show everything just shows less, it never faults.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::hexagram::LineValue;
use crate::core::session::{SessionFrame, Viewport};
use crate::core::wrap::display_width;

/// Columns a hexagram bar spans.
pub const HEX_WIDTH: u16 = 20;
/// Columns of the gap splitting a yin bar.
pub const HEX_GAP: u16 = 6;
/// Left margin of the hexagram column.
pub const HEX_X: u16 = 4;

const BAR_CHAR: &str = "━";

/// Screen positions shared between ticking and drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub hex_y: u16,
    pub text_x: u16,
    pub text_width: u16,
    /// First row of the wrapped-text window.
    pub view_y: u16,
    pub visible_rows: u16,
    pub width: u16,
    pub height: u16,
}

pub fn geometry(area: Rect) -> Geometry {
    let hex_y = (area.height / 2).saturating_sub(7);
    let text_x = HEX_X + HEX_WIDTH + 6;
    let view_y = hex_y + 5;
    Geometry {
        hex_y,
        text_x,
        text_width: area.width.saturating_sub(text_x + 2),
        view_y,
        visible_rows: area.height.saturating_sub(view_y + 4),
        width: area.width,
        height: area.height,
    }
}

impl Geometry {
    pub fn viewport(&self) -> Viewport {
        Viewport {
            text_width: self.text_width as usize,
            visible_rows: self.visible_rows as usize,
        }
    }
}

pub fn draw_frame(frame: &mut Frame, session_frame: &SessionFrame) {
    let g = geometry(frame.area());

    draw_hexagram(frame, &g, &session_frame.lines);

    match &session_frame.paused {
        None => {
            let style = Style::default().fg(Color::Blue);
            print_at(
                frame,
                g.text_x,
                g.hex_y,
                Line::styled(format!("▲ {}", session_frame.upper_trigram), style),
            );
            print_at(
                frame,
                g.text_x,
                g.hex_y + 10,
                Line::styled(format!("▼ {}", session_frame.lower_trigram), style),
            );
        }
        Some(paused) => {
            print_at(
                frame,
                g.text_x,
                g.hex_y,
                Line::styled(
                    paused.title.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
            );
            let label_style = Style::default().fg(Color::White);
            print_at(
                frame,
                g.text_x,
                g.hex_y + 2,
                Line::styled(format!("Up: {}", session_frame.upper_trigram), label_style),
            );
            print_at(
                frame,
                g.text_x,
                g.hex_y + 3,
                Line::styled(format!("Low: {}", session_frame.lower_trigram), label_style),
            );

            for (i, text_line) in paused.visible.iter().enumerate() {
                print_at(
                    frame,
                    g.text_x,
                    g.view_y + i as u16,
                    Line::styled(text_line.clone(), label_style),
                );
            }

            if let Some(percent) = paused.scroll_percent {
                let indicator = format!("[ SCROLL {percent}% ]");
                let x = g.width.saturating_sub(indicator.len() as u16 + 2);
                print_at(
                    frame,
                    x,
                    g.view_y.saturating_sub(1),
                    Line::styled(indicator, Style::default().fg(Color::Yellow)),
                );
            }
        }
    }

    // Prompt, centered on the second-to-last row. Blinks while running,
    // bold while paused.
    let prompt_style = if session_frame.paused.is_none() {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::SLOW_BLINK)
    } else {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    };
    let prompt_x = g
        .width
        .saturating_sub(display_width(&session_frame.prompt) as u16)
        / 2;
    print_at(
        frame,
        prompt_x,
        g.height.saturating_sub(2),
        Line::styled(session_frame.prompt.clone(), prompt_style),
    );
}

fn draw_hexagram(frame: &mut Frame, g: &Geometry, lines: &[LineValue; 6]) {
    let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    for (i, line) in lines.iter().enumerate() {
        let bar = match line {
            LineValue::Yang => BAR_CHAR.repeat(HEX_WIDTH as usize),
            LineValue::Yin => {
                let half = ((HEX_WIDTH - HEX_GAP) / 2) as usize;
                format!(
                    "{}{}{}",
                    BAR_CHAR.repeat(half),
                    " ".repeat(HEX_GAP as usize),
                    BAR_CHAR.repeat(half)
                )
            }
        };
        // One blank row between bars, top line first
        print_at(frame, HEX_X, g.hex_y + 2 * i as u16, Line::styled(bar, style));
    }
}

/// Render a single line at an absolute position, clipped to the terminal.
fn print_at(frame: &mut Frame, x: u16, y: u16, line: Line) {
    let area = frame.area();
    if y >= area.height || x >= area.width {
        return;
    }
    let rect = Rect::new(x, y, area.width - x, 1);
    frame.render_widget(Paragraph::new(line), rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::PausedView;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn running_frame() -> SessionFrame {
        SessionFrame {
            lines: [LineValue::Yang; 6],
            upper_trigram: "CONNECT",
            lower_trigram: "CONNECT",
            prompt: ">> FLUX RUNNING <<".to_string(),
            paused: None,
        }
    }

    fn paused_frame() -> SessionFrame {
        SessionFrame {
            lines: [LineValue::Yin; 6],
            upper_trigram: "DISSOLVE",
            lower_trigram: "DISSOLVE",
            prompt: "[SPACE] RESTART [Q] QUIT".to_string(),
            paused: Some(PausedView {
                title: "HEXAGRAM #2: THE FIELD".to_string(),
                visible: vec!["line one".to_string(), "line two".to_string()],
                scroll_percent: Some(40),
            }),
        }
    }

    fn render_to_rows(session_frame: &SessionFrame, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_frame(f, session_frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn running_frame_shows_trigram_labels_and_prompt() {
        let rows = render_to_rows(&running_frame(), 80, 24);
        let all = rows.join("\n");
        assert!(all.contains("▲ CONNECT"));
        assert!(all.contains("▼ CONNECT"));
        assert!(all.contains(">> FLUX RUNNING <<"));
    }

    #[test]
    fn paused_frame_shows_title_text_and_indicator() {
        let rows = render_to_rows(&paused_frame(), 80, 24);
        let all = rows.join("\n");
        assert!(all.contains("HEXAGRAM #2: THE FIELD"));
        assert!(all.contains("line one"));
        assert!(all.contains("line two"));
        assert!(all.contains("[ SCROLL 40% ]"));
        assert!(all.contains("[SPACE] RESTART [Q] QUIT"));
    }

    #[test]
    fn yin_bars_have_a_gap_and_yang_bars_do_not() {
        let running = render_to_rows(&running_frame(), 80, 24).join("\n");
        assert!(running.contains(&BAR_CHAR.repeat(HEX_WIDTH as usize)));

        let paused = render_to_rows(&paused_frame(), 80, 24).join("\n");
        let half = BAR_CHAR.repeat(7);
        assert!(paused.contains(&format!("{half}      {half}")));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        render_to_rows(&running_frame(), 10, 4);
        render_to_rows(&paused_frame(), 10, 4);
        render_to_rows(&paused_frame(), 1, 1);
    }

    #[test]
    fn geometry_shrinks_gracefully() {
        let g = geometry(Rect::new(0, 0, 20, 5));
        // Narrower than the hexagram column: no text area, no rows
        assert_eq!(g.text_width, 0);
        assert_eq!(g.viewport().text_width, 0);

        let g = geometry(Rect::new(0, 0, 100, 40));
        assert_eq!(g.text_x, HEX_X + HEX_WIDTH + 6);
        assert_eq!(g.text_width, 100 - (HEX_X + HEX_WIDTH + 6) - 2);
        assert!(g.visible_rows > 0);
    }
}
