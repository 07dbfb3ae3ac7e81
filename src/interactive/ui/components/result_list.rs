use crate::download::Whitepaper;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub struct ResultList {
    results: Vec<&'static Whitepaper>,
    selected_index: usize,
    title: String,
    empty_text: String,
    alignment: Alignment,
}

impl ResultList {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            selected_index: 0,
            title: "Whitepapers".to_string(),
            empty_text: "No results".to_string(),
            alignment: Alignment::Left,
        }
    }

    pub fn set_results(&mut self, results: Vec<&'static Whitepaper>, selected_index: usize) {
        self.results = results;
        self.selected_index = selected_index;
    }

    pub fn set_labels(&mut self, title: String, empty_text: &str) {
        self.title = title;
        self.empty_text = empty_text.to_string();
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }
}

impl Default for ResultList {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(self.title.clone())
            .borders(Borders::ALL);

        if self.results.is_empty() {
            let empty = Paragraph::new(self.empty_text.clone())
                .alignment(self.alignment)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .results
            .iter()
            .map(|paper| {
                ListItem::new(
                    Line::from(vec![
                        Span::styled(
                            paper.title,
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!(" v{}", paper.version),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::raw(format!("  {}", paper.summary)),
                    ])
                    .alignment(self.alignment),
                )
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::Cyan))
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected_index.min(self.results.len() - 1)));
        f.render_stateful_widget(list, area, &mut list_state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => Some(Message::SelectUp),
            KeyCode::Down => Some(Message::SelectDown),
            KeyCode::Enter => Some(Message::StartDownload),
            _ => None,
        }
    }
}
