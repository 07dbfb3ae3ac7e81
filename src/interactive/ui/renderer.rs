use crate::download::DownloadStatus;
use crate::interactive::ui::app_state::{AppState, Mode};
use crate::interactive::ui::components::{
    Component, download_panel::DownloadPanel, header::Header, help_dialog::HelpDialog,
    result_list::ResultList, search_bar::SearchBar,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    widgets::Paragraph,
};
use std::path::PathBuf;

/// Controller outputs the renderer needs besides [`AppState`]
pub struct View<'a> {
    pub state: &'a AppState,
    pub is_typing: bool,
    pub download_status: DownloadStatus,
    pub download_percent: f64,
    pub download_title: &'a str,
    pub saved_to: Option<PathBuf>,
    pub countdown: String,
}

pub struct Renderer {
    header: Header,
    search_bar: SearchBar,
    result_list: ResultList,
    download_panel: DownloadPanel,
    help_dialog: HelpDialog,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            header: Header::new(),
            search_bar: SearchBar::new(),
            result_list: ResultList::new(),
            download_panel: DownloadPanel::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, view: &View) {
        let state = view.state;
        let language = state.language;
        let t = language.translations();
        let alignment = Header::alignment(language);

        let chunks = Layout::vertical([
            Constraint::Length(7), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(3),    // Results
            Constraint::Length(3), // Download
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

        self.header.set_language(language);
        self.header.set_countdown(view.countdown.clone());

        self.search_bar.set_labels(t.nav.whitepapers, t.search.placeholder);
        self.search_bar
            .set_status(view.is_typing.then(|| t.search.typing.to_string()));
        self.search_bar.set_alignment(alignment);

        let results_title = if state.search.committed_query.is_empty() {
            t.nav.whitepapers.to_string()
        } else {
            format!("{} \"{}\"", t.search.results_for, state.search.committed_query)
        };
        self.result_list.set_labels(results_title, t.search.empty);
        self.result_list
            .set_results(state.search.results.clone(), state.search.selected_index);
        self.result_list.set_alignment(alignment);

        self.download_panel.set_progress(
            language,
            view.download_status,
            view.download_percent,
            view.download_title,
            view.saved_to.clone(),
        );

        self.header.render(f, chunks[0]);
        self.search_bar.render(f, chunks[1]);
        self.result_list.render(f, chunks[2]);
        self.download_panel.render(f, chunks[3]);

        let footer_text = match &state.ui.message {
            Some(message) => message.clone(),
            None => format!("© Chainsite. {}  F1: Help", t.footer),
        };
        let footer = Paragraph::new(footer_text)
            .alignment(if alignment == Alignment::Right {
                Alignment::Right
            } else {
                Alignment::Center
            })
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(footer, chunks[4]);

        if state.mode == Mode::Help {
            let area = f.area();
            self.help_dialog.render(f, area);
        }
    }

    pub fn get_header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn get_download_panel_mut(&mut self) -> &mut DownloadPanel {
        &mut self.download_panel
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
