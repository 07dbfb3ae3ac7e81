//! Wires the controllers to the terminal UI state machine

use crate::countdown::Countdown;
use crate::download::{DownloadSink, ProgressTimings, SimulatedDownload, WHITEPAPERS};
use crate::error::SiteResult;
use crate::format::format_countdown;
use crate::i18n::{SiteContext, use_language, use_language_mut};
use crate::interactive::ui::{
    app_state::{AppState, Mode},
    commands::Command,
    components::Component,
    events::Message,
    renderer::{Renderer, View},
};
use crate::search::{DebouncedSearch, SearchTimings};
use crate::timer::Clock;
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use ratatui::Frame;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

pub struct SiteApp<C: Clock + Clone, R: Rng> {
    context: SiteContext,
    search: DebouncedSearch<C>,
    download: SimulatedDownload<C, R>,
    countdown: Countdown,
    state: AppState,
    renderer: Renderer,
    committed: Rc<RefCell<Vec<String>>>,
}

impl<C: Clock + Clone, R: Rng> SiteApp<C, R> {
    /// `context` must provide a [`crate::i18n::LanguageStore`]; it is
    /// initialized here.
    pub fn new(
        mut context: SiteContext,
        clock: C,
        rng: R,
        search_timings: SearchTimings,
        progress_timings: ProgressTimings,
        countdown: Countdown,
        sink: Box<dyn DownloadSink>,
    ) -> SiteResult<Self> {
        let language = use_language_mut(&mut context)?.initialize();

        let committed = Rc::new(RefCell::new(Vec::new()));
        let search = DebouncedSearch::new(
            clock.clone(),
            search_timings,
            Box::new({
                let committed = committed.clone();
                move |query: &str| committed.borrow_mut().push(query.to_string())
            }),
        );
        let download = SimulatedDownload::new(clock, rng, progress_timings, &WHITEPAPERS[0], sink);

        Ok(Self {
            context,
            search,
            download,
            countdown,
            state: AppState::new(language),
            renderer: Renderer::new(),
            committed,
        })
    }

    /// Returns true when the app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> SiteResult<bool> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_message(Message::QuitRequested);
        }

        if self.state.mode == Mode::Help {
            return match self.renderer.get_help_dialog_mut().handle_key(key) {
                Some(msg) => self.handle_message(msg),
                None => Ok(false),
            };
        }

        let message = match key.code {
            KeyCode::F(1) => Some(Message::ShowHelp),
            KeyCode::Esc => Some(Message::ClearSearch),
            KeyCode::Tab | KeyCode::F(2) => self.renderer.get_header_mut().handle_key(key),
            KeyCode::Up | KeyCode::Down | KeyCode::Enter => {
                self.renderer.get_result_list_mut().handle_key(key)
            }
            KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.renderer.get_download_panel_mut().handle_key(key)
            }
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        };

        match message {
            Some(msg) => self.handle_message(msg),
            None => Ok(false),
        }
    }

    pub fn handle_message(&mut self, message: Message) -> SiteResult<bool> {
        let command = self.state.update(message);
        let quit = self.execute_command(command)?;
        self.drain_committed();
        Ok(quit)
    }

    fn execute_command(&mut self, command: Command) -> SiteResult<bool> {
        match command {
            Command::None => {}
            Command::UpdateSearch(query) => self.search.on_input_change(query),
            Command::ClearSearch => {
                self.renderer.get_search_bar_mut().set_query(String::new());
                self.search.clear();
            }
            Command::SetLanguage(language) => {
                let store = use_language_mut(&mut self.context)?;
                store.set(language);
                let active = store.language();
                self.state.update(Message::LanguageChanged(active));
            }
            Command::StartDownload(paper) => self.download.start_with(paper),
            Command::CancelDownload => self.download.cancel(),
            Command::Quit => return Ok(true),
        }
        Ok(false)
    }

    /// Fire due timers and apply any committed search queries
    pub fn tick(&mut self) {
        self.search.tick();
        self.download.tick();
        self.drain_committed();
    }

    fn drain_committed(&mut self) {
        let queries: Vec<String> = self.committed.borrow_mut().drain(..).collect();
        for query in queries {
            self.state.update(Message::SearchCommitted(query));
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.search.next_deadline(), self.download.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn render(&mut self, f: &mut Frame, now: DateTime<Utc>) {
        let language = self.state.language;
        let view = View {
            state: &self.state,
            is_typing: self.search.is_typing(),
            download_status: self.download.status(),
            download_percent: self.download.percent(),
            download_title: self.download.artifact().title,
            saved_to: self.download.saved_to().map(|p| p.to_path_buf()),
            countdown: format_countdown(language, &self.countdown.remaining(now)),
        };
        self.renderer.render(f, &view);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn context(&self) -> &SiteContext {
        &self.context
    }

    pub fn search(&self) -> &DebouncedSearch<C> {
        &self.search
    }

    pub fn download(&self) -> &SimulatedDownload<C, R> {
        &self.download
    }

    pub fn language(&self) -> SiteResult<crate::i18n::Language> {
        Ok(use_language(&self.context)?.language())
    }
}
