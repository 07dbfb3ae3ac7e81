use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text() -> Vec<Line<'static>> {
        let heading = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        vec![
            Line::from(vec![Span::styled(
                "Chainsite - Interactive Mode",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled("Search:", heading)]),
            Line::from("  Type        - Search whitepapers"),
            Line::from("  Esc         - Clear search"),
            Line::from("  Ctrl+W/U/K  - Delete word / to start / to end"),
            Line::from(""),
            Line::from(vec![Span::styled("Whitepapers:", heading)]),
            Line::from("  ↑/↓         - Select"),
            Line::from("  Enter       - Download selected"),
            Line::from("  Ctrl+X      - Cancel running download"),
            Line::from(""),
            Line::from(vec![Span::styled("General:", heading)]),
            Line::from("  Tab / F2    - Switch language"),
            Line::from("  F1          - Toggle this help"),
            Line::from("  Ctrl+C      - Quit"),
        ]
    }

    fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let lines = Self::get_help_text();
        let popup = Self::centered(area, 56, lines.len() as u16 + 2);

        let help = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .block(Block::default().title("Help").borders(Borders::ALL));

        f.render_widget(Clear, popup);
        f.render_widget(help, popup);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Enter => {
                Some(Message::CloseHelp)
            }
            _ => None,
        }
    }
}
