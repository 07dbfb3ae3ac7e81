use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    title: String,
    placeholder: String,
    status: Option<String>,
    alignment: Alignment,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            cursor_position: 0,
            title: "Search".to_string(),
            placeholder: String::new(),
            status: None,
            alignment: Alignment::Left,
        }
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.cursor_position = self.query.chars().count();
    }

    pub fn set_labels(&mut self, title: &str, placeholder: &str) {
        self.title = title.to_string();
        self.placeholder = placeholder.to_string();
    }

    /// Shown next to the title, e.g. the typing indicator
    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn get_query(&self) -> &str {
        &self.query
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    /// Find the previous word boundary from the given position
    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| c.is_whitespace()) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !c.is_whitespace()) {
            pos -= 1;
        }

        pos
    }

    /// Find the next word boundary from the given position
    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;
        let len = chars.len();

        while pos < len && chars.get(pos).is_some_and(|c| !c.is_whitespace()) {
            pos += 1;
        }
        while pos < len && chars.get(pos).is_some_and(|c| c.is_whitespace()) {
            pos += 1;
        }

        pos
    }

    /// Delete chars in `start..end` and report whether the query changed
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.query.chars().count() {
            return false;
        }

        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    fn changed(&self) -> Option<Message> {
        Some(Message::QueryChanged(self.query.clone()))
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        let input_text = if self.query.is_empty() {
            vec![
                Span::styled(" ", cursor_style),
                Span::styled(
                    self.placeholder.clone(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]
        } else if self.cursor_position < self.query.chars().count() {
            let before: String = self.query.chars().take(self.cursor_position).collect();
            let at: String = self
                .query
                .chars()
                .nth(self.cursor_position)
                .map(String::from)
                .unwrap_or_else(|| " ".to_string());
            let after: String = self.query.chars().skip(self.cursor_position + 1).collect();

            vec![
                Span::raw(before),
                Span::styled(at, cursor_style),
                Span::raw(after),
            ]
        } else {
            vec![Span::raw(self.query.clone()), Span::styled(" ", cursor_style)]
        };

        let mut title = self.title.clone();
        if let Some(status) = &self.status {
            title.push_str(&format!(" - {status}"));
        }

        let input = Paragraph::new(Line::from(input_text))
            .alignment(self.alignment)
            .block(Block::default().title(title).borders(Borders::ALL))
            .style(Style::default().fg(Color::Yellow));

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.query.chars().count();
                    None
                }
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    None
                }
                KeyCode::Char('f') => {
                    if self.cursor_position < self.query.chars().count() {
                        self.cursor_position += 1;
                    }
                    None
                }
                KeyCode::Char('h') => {
                    if self.cursor_position > 0
                        && self.delete_range(self.cursor_position - 1, self.cursor_position)
                    {
                        return self.changed();
                    }
                    None
                }
                KeyCode::Char('d') => {
                    if self.delete_range(self.cursor_position, self.cursor_position + 1) {
                        return self.changed();
                    }
                    None
                }
                // Delete word before cursor
                KeyCode::Char('w') => {
                    let start = self.find_prev_word_boundary(self.cursor_position);
                    if self.delete_range(start, self.cursor_position) {
                        return self.changed();
                    }
                    None
                }
                // Delete to beginning of line
                KeyCode::Char('u') => {
                    if self.delete_range(0, self.cursor_position) {
                        return self.changed();
                    }
                    None
                }
                // Delete to end of line
                KeyCode::Char('k') => {
                    let len = self.query.chars().count();
                    if self.delete_range(self.cursor_position, len) {
                        return self.changed();
                    }
                    None
                }
                _ => None,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            return match key.code {
                KeyCode::Char('b') => {
                    self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                    None
                }
                KeyCode::Char('f') => {
                    self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                    None
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let byte_pos = self.byte_offset(self.cursor_position);
                self.query.insert(byte_pos, c);
                self.cursor_position += 1;
                self.changed()
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0
                    && self.delete_range(self.cursor_position - 1, self.cursor_position)
                {
                    return self.changed();
                }
                None
            }
            KeyCode::Delete => {
                if self.delete_range(self.cursor_position, self.cursor_position + 1) {
                    return self.changed();
                }
                None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor_position < self.query.chars().count() {
                    self.cursor_position += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.query.chars().count();
                None
            }
            _ => None,
        }
    }
}
