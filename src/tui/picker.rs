//! # Deck Picker
//!
//! Full-screen configuration view for choosing the default deck, opened
//! with `--options`. Up/Down select, Enter saves, q/Esc cancels.
//!
//! Key handling lives on the state struct and returns a [`PickerEvent`],
//! so the selection logic is testable without a terminal.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::deck::DeckInfo;

pub struct DeckPickerState {
    pub decks: Vec<DeckInfo>,
    /// Deck currently set as the default in the config.
    pub active_id: String,
    pub selected: usize,
    pub list_state: ListState,
}

/// What the picker wants the caller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// Save the deck id as the default and close.
    Save(String),
    /// Close without saving.
    Cancel,
}

impl DeckPickerState {
    pub fn new(decks: Vec<DeckInfo>, active_id: &str) -> Self {
        let selected = decks
            .iter()
            .position(|d| d.id == active_id)
            .unwrap_or(0);
        let mut list_state = ListState::default();
        if !decks.is_empty() {
            list_state.select(Some(selected));
        }
        Self {
            decks,
            active_id: active_id.to_string(),
            selected,
            list_state,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Option<PickerEvent> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Some(PickerEvent::Cancel),
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            KeyCode::Down => {
                if !self.decks.is_empty() {
                    self.selected = (self.selected + 1).min(self.decks.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            KeyCode::Enter => self
                .decks
                .get(self.selected)
                .map(|deck| PickerEvent::Save(deck.id.clone())),
            _ => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let overlay = centered_rect(60, 60, frame.area());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" HEXFETCH CONFIGURATION ")
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(" [ENTER] Save & Exit   [Q] Cancel ").centered())
            .padding(Padding::horizontal(1));

        if self.decks.is_empty() {
            let empty = Paragraph::new("No decks found.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let items: Vec<ListItem> = self
            .decks
            .iter()
            .enumerate()
            .map(|(i, deck)| {
                let marker = if deck.id == self.active_id { "[*]" } else { "[ ]" };
                let style = if i == self.selected {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::styled(format!(" {marker} {}", deck.label), style))
            })
            .collect();

        frame.render_stateful_widget(List::new(items).block(block), overlay, &mut self.list_state);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
