use crate::download::{Whitepaper, catalog};
use crate::i18n::Language;
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Help,
}

pub struct AppState {
    pub mode: Mode,
    pub language: Language,
    pub search: SearchState,
    pub ui: UiState,
}

pub struct SearchState {
    /// Last query the debounced search committed
    pub committed_query: String,
    pub results: Vec<&'static Whitepaper>,
    pub selected_index: usize,
}

pub struct UiState {
    pub message: Option<String>,
}

impl AppState {
    pub fn new(language: Language) -> Self {
        Self {
            mode: Mode::Browse,
            language,
            search: SearchState {
                committed_query: String::new(),
                results: catalog::search(""),
                selected_index: 0,
            },
            ui: UiState { message: None },
        }
    }

    pub fn selected(&self) -> Option<&'static Whitepaper> {
        self.search.results.get(self.search.selected_index).copied()
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => Command::UpdateSearch(q),
            Message::ClearSearch => Command::ClearSearch,
            Message::SearchCommitted(q) => {
                self.search.results = catalog::search(&q);
                self.search.committed_query = q;
                self.search.selected_index = 0;
                Command::None
            }
            Message::SelectUp => {
                if self.search.selected_index > 0 {
                    self.search.selected_index -= 1;
                }
                Command::None
            }
            Message::SelectDown => {
                if self.search.selected_index + 1 < self.search.results.len() {
                    self.search.selected_index += 1;
                }
                Command::None
            }
            Message::StartDownload => match self.selected() {
                Some(paper) => {
                    self.ui.message = None;
                    Command::StartDownload(paper)
                }
                None => {
                    self.ui.message = Some(self.language.translations().search.empty.to_string());
                    Command::None
                }
            },
            Message::CancelDownload => Command::CancelDownload,
            Message::CycleLanguage => Command::SetLanguage(self.language.cycle()),
            Message::LanguageChanged(language) => {
                self.language = language;
                Command::None
            }
            Message::ShowHelp => {
                self.mode = Mode::Help;
                Command::None
            }
            Message::CloseHelp => {
                self.mode = Mode::Browse;
                Command::None
            }
            Message::QuitRequested => Command::Quit,
        }
    }
}
