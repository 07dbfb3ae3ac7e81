#[cfg(test)]
mod tests {
    use crate::SiteError;
    use crate::countdown::Countdown;
    use crate::document::MemoryDocument;
    use crate::download::{DownloadStatus, MemorySink, ProgressTimings};
    use crate::i18n::{Direction, LANGUAGE_STORAGE_KEY, Language, LanguageStore, SiteContext};
    use crate::interactive::SiteApp;
    use crate::interactive::ui::app_state::Mode;
    use crate::search::SearchTimings;
    use crate::storage::MemoryStorage;
    use crate::timer::{Clock, ManualClock};
    use chrono::{TimeZone, Utc};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use std::time::Duration;

    struct Harness {
        app: SiteApp<ManualClock, StdRng>,
        clock: ManualClock,
        storage: MemoryStorage,
        document: MemoryDocument,
        sink: MemorySink,
    }

    fn create_harness(storage: MemoryStorage) -> Harness {
        let clock = ManualClock::new();
        let document = MemoryDocument::new();
        let sink = MemorySink::new();

        let mut context = SiteContext::new();
        context.provide(LanguageStore::new(
            Language::En,
            Box::new(storage.clone()),
            Box::new(document.clone()),
        ));

        let app = SiteApp::new(
            context,
            clock.clone(),
            StdRng::seed_from_u64(42),
            SearchTimings::default(),
            ProgressTimings {
                min_increment: 20.0,
                max_increment: 20.0,
                ..ProgressTimings::default()
            },
            Countdown::new(Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap()),
            Box::new(sink.clone()),
        )
        .unwrap();

        Harness {
            app,
            clock,
            storage,
            document,
            sink,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(harness: &mut Harness, text: &str) {
        for c in text.chars() {
            harness.app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn advance(harness: &mut Harness, ms: u64) {
        harness.clock.advance(Duration::from_millis(ms));
        harness.app.tick();
    }

    fn render(harness: &mut Harness) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 12, 30, 22, 0, 0).unwrap();
        terminal.draw(|f| harness.app.render(f, now)).unwrap();
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
    fn test_app_requires_language_provider() {
        let result = SiteApp::new(
            SiteContext::new(),
            ManualClock::new(),
            StdRng::seed_from_u64(1),
            SearchTimings::default(),
            ProgressTimings::default(),
            Countdown::new(Utc::now()),
            Box::new(MemorySink::new()),
        );
        assert!(matches!(result, Err(SiteError::MissingProvider { .. })));
    }

    #[test]
    fn test_startup_restores_persisted_language() {
        let mut harness = create_harness(MemoryStorage::with_slot(LANGUAGE_STORAGE_KEY, "ar"));

        assert_eq!(harness.app.state().language, Language::Ar);
        assert_eq!(
            harness.document.current().map(|a| a.dir),
            Some(Direction::Rtl)
        );

        let screen = render(&mut harness);
        assert!(screen.contains("الرئيسية"));
    }

    #[test]
    fn test_typing_filters_results_after_debounce() {
        let mut harness = create_harness(MemoryStorage::new());
        type_text(&mut harness, "bridge");

        assert!(harness.app.search().is_typing());
        assert_eq!(harness.app.state().search.results.len(), 4);

        advance(&mut harness, 299);
        assert_eq!(harness.app.state().search.results.len(), 4);

        advance(&mut harness, 1);
        assert_eq!(harness.app.state().search.committed_query, "bridge");
        assert_eq!(harness.app.state().search.results.len(), 1);

        let screen = render(&mut harness);
        assert!(screen.contains("Results for \"bridge\""));
        assert!(screen.contains("Cross-Chain Bridge"));
    }

    #[test]
    fn test_escape_clears_search_immediately() {
        let mut harness = create_harness(MemoryStorage::new());
        type_text(&mut harness, "gov");
        advance(&mut harness, 300);
        assert_eq!(harness.app.state().search.results.len(), 1);

        type_text(&mut harness, "x");
        harness.app.handle_key(key(KeyCode::Esc)).unwrap();

        assert_eq!(harness.app.search().raw_input(), "");
        assert_eq!(harness.app.state().search.committed_query, "");
        assert_eq!(harness.app.state().search.results.len(), 4);
        assert!(!harness.app.search().has_pending_commit());
    }

    #[test]
    fn test_tab_cycles_and_persists_language() {
        let mut harness = create_harness(MemoryStorage::new());
        harness.app.handle_key(key(KeyCode::Tab)).unwrap();

        assert_eq!(harness.app.state().language, Language::Tr);
        assert_eq!(harness.app.language().unwrap(), Language::Tr);
        assert_eq!(
            harness.storage.peek(LANGUAGE_STORAGE_KEY),
            Some("tr".to_string())
        );

        let screen = render(&mut harness);
        assert!(screen.contains("Ana Sayfa"));
    }

    #[test]
    fn test_enter_downloads_selected_paper_once() {
        let mut harness = create_harness(MemoryStorage::new());
        harness.app.handle_key(key(KeyCode::Down)).unwrap();
        harness.app.handle_key(key(KeyCode::Enter)).unwrap();
        harness.app.handle_key(key(KeyCode::Enter)).unwrap();

        assert_eq!(harness.app.download().status(), DownloadStatus::Running);
        advance(&mut harness, 400);
        assert_eq!(harness.app.download().percent(), 40.0);

        let screen = render(&mut harness);
        assert!(screen.contains("Downloading Token Economics: 40%"));

        advance(&mut harness, 5_000);
        assert_eq!(harness.app.download().status(), DownloadStatus::Complete);
        assert_eq!(harness.sink.delivered(), vec!["tokenomics"]);

        let screen = render(&mut harness);
        assert!(screen.contains("Download complete"));
    }

    #[test]
    fn test_ctrl_x_cancels_download() {
        let mut harness = create_harness(MemoryStorage::new());
        harness.app.handle_key(key(KeyCode::Enter)).unwrap();
        advance(&mut harness, 200);
        harness.app.handle_key(ctrl('x')).unwrap();

        assert_eq!(harness.app.download().status(), DownloadStatus::Idle);
        advance(&mut harness, 10_000);
        assert!(harness.sink.delivered().is_empty());
    }

    #[test]
    fn test_next_deadline_tracks_both_controllers() {
        let mut harness = create_harness(MemoryStorage::new());
        assert!(harness.app.next_deadline().is_none());

        harness.app.handle_key(key(KeyCode::Enter)).unwrap();
        let download_tick = harness.clock.now() + Duration::from_millis(200);
        assert_eq!(harness.app.next_deadline(), Some(download_tick));

        type_text(&mut harness, "a");
        assert_eq!(harness.app.next_deadline(), Some(download_tick));
    }

    #[test]
    fn test_help_mode_swallows_keys() {
        let mut harness = create_harness(MemoryStorage::new());
        harness.app.handle_key(key(KeyCode::F(1))).unwrap();
        assert_eq!(harness.app.state().mode, Mode::Help);

        type_text(&mut harness, "zz");
        assert_eq!(harness.app.search().raw_input(), "");

        let screen = render(&mut harness);
        assert!(screen.contains("Chainsite - Interactive Mode"));

        harness.app.handle_key(key(KeyCode::Esc)).unwrap();
        assert_eq!(harness.app.state().mode, Mode::Browse);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut harness = create_harness(MemoryStorage::new());
        assert!(!harness.app.handle_key(key(KeyCode::Char('c'))).unwrap());
        assert!(harness.app.handle_key(ctrl('c')).unwrap());
    }

    #[test]
    fn test_countdown_is_rendered() {
        let mut harness = create_harness(MemoryStorage::new());
        let screen = render(&mut harness);
        assert!(screen.contains("Mainnet launch in"));
        assert!(screen.contains("1 days 02 hours 00 minutes 00 seconds"));
    }
}
