#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::download_panel::DownloadPanel;
    use super::super::header::Header;
    use super::super::help_dialog::HelpDialog;
    use super::super::result_list::ResultList;
    use super::super::search_bar::SearchBar;
    use crate::download::{DownloadStatus, WHITEPAPERS};
    use crate::i18n::Language;
    use crate::interactive::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Alignment};
    use std::path::PathBuf;

    fn render_component(component: &mut dyn Component, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                component.render(f, area);
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn buffer_to_string(buffer: &Buffer) -> String {
        let mut output = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    output.push_str(cell.symbol());
                }
            }
            output.push('\n');
        }
        output
    }

    #[test]
    fn test_header_shows_navigation_and_countdown() {
        let mut header = Header::new();
        header.set_countdown("3 days 04 hours 05 minutes 06 seconds".to_string());

        let screen = render_component(&mut header, 100, 7);
        assert!(screen.contains("Home"));
        assert!(screen.contains("Language: English (Tab)"));
        assert!(screen.contains("Mainnet launch in 3 days 04 hours"));
    }

    #[test]
    fn test_header_follows_language() {
        let mut header = Header::new();
        header.set_language(Language::Es);

        let screen = render_component(&mut header, 100, 7);
        assert!(screen.contains("Inicio"));
        assert!(screen.contains("Español"));
        assert!(screen.contains("[Explora el ecosistema]"));
    }

    #[test]
    fn test_header_shows_hero_call_to_action() {
        let mut header = Header::new();
        let screen = render_component(&mut header, 100, 7);
        assert!(screen.contains("The chain that connects everything  [Explore the ecosystem]"));
    }

    #[test]
    fn test_header_alignment_by_direction() {
        assert_eq!(Header::alignment(Language::En), Alignment::Left);
        assert_eq!(Header::alignment(Language::Ru), Alignment::Left);
        assert_eq!(Header::alignment(Language::Ar), Alignment::Right);
    }

    #[test]
    fn test_header_tab_cycles_language() {
        let mut header = Header::new();
        let msg = header.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::empty()));
        assert!(matches!(msg, Some(Message::CycleLanguage)));
        let msg = header.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty()));
        assert!(msg.is_none());
    }

    #[test]
    fn test_result_list_empty_state() {
        let mut list = ResultList::new();
        list.set_labels("Results for \"zzz\"".to_string(), "Nothing here");
        list.set_results(Vec::new(), 0);

        let screen = render_component(&mut list, 60, 5);
        assert!(screen.contains("Results for \"zzz\""));
        assert!(screen.contains("Nothing here"));
    }

    #[test]
    fn test_result_list_highlights_selection() {
        let mut list = ResultList::new();
        list.set_results(WHITEPAPERS.iter().collect(), 1);

        let screen = render_component(&mut list, 100, 8);
        assert!(screen.contains("Chainsite Protocol v2.1"));
        assert!(screen.contains("> Token Economics"));
    }

    #[test]
    fn test_result_list_clamps_stale_selection() {
        let mut list = ResultList::new();
        list.set_results(vec![&WHITEPAPERS[2]], 3);

        let screen = render_component(&mut list, 100, 5);
        assert!(screen.contains("> Cross-Chain Bridge"));
    }

    #[test]
    fn test_download_panel_labels() {
        let mut panel = DownloadPanel::new();

        panel.set_progress(Language::En, DownloadStatus::Idle, 0.0, "Token Economics", None);
        let screen = render_component(&mut panel, 80, 3);
        assert!(screen.contains("Download (Enter)"));

        panel.set_progress(
            Language::En,
            DownloadStatus::Running,
            42.0,
            "Token Economics",
            None,
        );
        let screen = render_component(&mut panel, 80, 3);
        assert!(screen.contains("Downloading Token Economics: 42%"));

        panel.set_progress(
            Language::En,
            DownloadStatus::Complete,
            100.0,
            "Token Economics",
            Some(PathBuf::from("/tmp/paper.md")),
        );
        let screen = render_component(&mut panel, 80, 3);
        assert!(screen.contains("Download complete. Saved to /tmp/paper.md"));
    }

    #[test]
    fn test_download_panel_localized_percent() {
        let mut panel = DownloadPanel::new();
        panel.set_progress(Language::Tr, DownloadStatus::Running, 37.5, "Bridge", None);

        let screen = render_component(&mut panel, 80, 3);
        assert!(screen.contains("%37,5"));
    }

    #[test]
    fn test_download_panel_keys() {
        let mut panel = DownloadPanel::new();
        let msg = panel.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::empty()));
        assert!(matches!(msg, Some(Message::StartDownload)));
        let msg = panel.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
        assert!(matches!(msg, Some(Message::CancelDownload)));
        let msg = panel.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::empty()));
        assert!(msg.is_none());
    }

    #[test]
    fn test_search_bar_shows_typing_status() {
        let mut search_bar = SearchBar::new();
        search_bar.set_labels("Whitepapers", "Search whitepapers...");

        let screen = render_component(&mut search_bar, 80, 3);
        assert!(screen.contains("Search whitepapers..."));

        search_bar.set_status(Some("Typing...".to_string()));
        let screen = render_component(&mut search_bar, 80, 3);
        assert!(screen.contains("Whitepapers - Typing..."));
    }

    #[test]
    fn test_help_dialog_render_and_close() {
        let mut dialog = HelpDialog::new();
        let screen = render_component(&mut dialog, 80, 24);
        assert!(screen.contains("Chainsite - Interactive Mode"));
        assert!(screen.contains("Switch language"));

        let msg = dialog.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::empty()));
        assert!(matches!(msg, Some(Message::CloseHelp)));
        let msg = dialog.handle_key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::empty()));
        assert!(msg.is_none());
    }
}
