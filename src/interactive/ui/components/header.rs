use crate::i18n::{Direction, Language};
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Navigation, hero copy and launch countdown
pub struct Header {
    language: Language,
    countdown: String,
}

impl Header {
    pub fn new() -> Self {
        Self {
            language: Language::En,
            countdown: String::new(),
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_countdown(&mut self, countdown: String) {
        self.countdown = countdown;
    }

    pub fn alignment(language: Language) -> Alignment {
        match language.direction() {
            Direction::Ltr => Alignment::Left,
            Direction::Rtl => Alignment::Right,
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Header {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let t = self.language.translations();
        let accent = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::from(vec![
                Span::styled(t.nav.home, accent),
                Span::raw("  "),
                Span::raw(t.nav.ecosystem),
                Span::raw("  "),
                Span::raw(t.nav.whitepapers),
                Span::raw("  |  "),
                Span::styled(
                    format!("{}: {} (Tab)", t.nav.language, self.language.native_name()),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(t.hero.title, accent),
                Span::raw("  "),
                Span::styled(format!("[{}]", t.hero.cta), Style::default().fg(Color::Yellow)),
            ]),
            Line::from(t.hero.subtitle),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("{} ", t.countdown.title),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(self.countdown.clone(), Style::default().fg(Color::Green)),
            ]),
        ];

        let header = Paragraph::new(lines)
            .alignment(Self::alignment(self.language))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::BOTTOM));

        f.render_widget(header, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Tab | KeyCode::F(2) => Some(Message::CycleLanguage),
            _ => None,
        }
    }
}
