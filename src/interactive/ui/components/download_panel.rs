use crate::download::DownloadStatus;
use crate::format::format_percent;
use crate::i18n::Language;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
};
use std::path::PathBuf;

pub struct DownloadPanel {
    language: Language,
    status: DownloadStatus,
    percent: f64,
    artifact_title: String,
    saved_to: Option<PathBuf>,
}

impl DownloadPanel {
    pub fn new() -> Self {
        Self {
            language: Language::En,
            status: DownloadStatus::Idle,
            percent: 0.0,
            artifact_title: String::new(),
            saved_to: None,
        }
    }

    pub fn set_progress(
        &mut self,
        language: Language,
        status: DownloadStatus,
        percent: f64,
        artifact_title: &str,
        saved_to: Option<PathBuf>,
    ) {
        self.language = language;
        self.status = status;
        self.percent = percent;
        self.artifact_title = artifact_title.to_string();
        self.saved_to = saved_to;
    }

    fn label(&self) -> String {
        let strings = &self.language.translations().download;
        match self.status {
            DownloadStatus::Idle => format!("{} (Enter)", strings.start),
            DownloadStatus::Running => format!(
                "{} {}: {}",
                strings.running,
                self.artifact_title,
                format_percent(self.language, self.percent)
            ),
            DownloadStatus::Complete => match &self.saved_to {
                Some(path) => format!("{}. {} {}", strings.complete, strings.saved_to, path.display()),
                None => strings.complete.to_string(),
            },
        }
    }
}

impl Default for DownloadPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DownloadPanel {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let color = match self.status {
            DownloadStatus::Idle => Color::DarkGray,
            DownloadStatus::Running => Color::Cyan,
            DownloadStatus::Complete => Color::Green,
        };
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(self.language.translations().nav.whitepapers)
                    .borders(Borders::ALL),
            )
            .gauge_style(Style::default().fg(color))
            .percent(self.percent.clamp(0.0, 100.0) as u16)
            .label(self.label());

        f.render_widget(gauge, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Enter => Some(Message::StartDownload),
            KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::CancelDownload)
            }
            _ => None,
        }
    }
}
