#[cfg(test)]
mod tests {
    use crate::download::WHITEPAPERS;
    use crate::i18n::Language;
    use crate::interactive::ui::app_state::{AppState, Mode};
    use crate::interactive::ui::commands::Command;
    use crate::interactive::ui::events::Message;

    fn create_test_state() -> AppState {
        AppState::new(Language::En)
    }

    #[test]
    fn test_initial_state() {
        let state = create_test_state();

        assert_eq!(state.mode, Mode::Browse);
        assert_eq!(state.search.committed_query, "");
        assert_eq!(state.search.results.len(), WHITEPAPERS.len());
        assert_eq!(state.search.selected_index, 0);
        assert!(state.ui.message.is_none());
    }

    #[test]
    fn test_query_changed_is_forwarded() {
        let mut state = create_test_state();
        let command = state.update(Message::QueryChanged("bridge".to_string()));

        assert_eq!(command, Command::UpdateSearch("bridge".to_string()));
        // Results only change once the query is committed
        assert_eq!(state.search.results.len(), WHITEPAPERS.len());
    }

    #[test]
    fn test_search_committed_filters_results() {
        let mut state = create_test_state();
        state.search.selected_index = 2;

        let command = state.update(Message::SearchCommitted("governance".to_string()));

        assert_eq!(command, Command::None);
        assert_eq!(state.search.committed_query, "governance");
        assert_eq!(state.search.results.len(), 1);
        assert_eq!(state.search.selected_index, 0);
    }

    #[test]
    fn test_selection_is_bounded() {
        let mut state = create_test_state();
        state.update(Message::SelectUp);
        assert_eq!(state.search.selected_index, 0);

        for _ in 0..10 {
            state.update(Message::SelectDown);
        }
        assert_eq!(state.search.selected_index, WHITEPAPERS.len() - 1);
    }

    #[test]
    fn test_start_download_uses_selection() {
        let mut state = create_test_state();
        state.update(Message::SelectDown);

        let command = state.update(Message::StartDownload);
        assert_eq!(command, Command::StartDownload(&WHITEPAPERS[1]));
    }

    #[test]
    fn test_start_download_without_results() {
        let mut state = create_test_state();
        state.update(Message::SearchCommitted("zzz".to_string()));

        let command = state.update(Message::StartDownload);
        assert_eq!(command, Command::None);
        assert_eq!(
            state.ui.message.as_deref(),
            Some("No whitepapers match your search")
        );
    }

    #[test]
    fn test_cycle_language() {
        let mut state = create_test_state();
        assert_eq!(
            state.update(Message::CycleLanguage),
            Command::SetLanguage(Language::Tr)
        );
        // The state mirrors the store only once the change is confirmed
        assert_eq!(state.language, Language::En);

        state.update(Message::LanguageChanged(Language::Tr));
        assert_eq!(state.language, Language::Tr);
    }

    #[test]
    fn test_help_and_quit() {
        let mut state = create_test_state();
        state.update(Message::ShowHelp);
        assert_eq!(state.mode, Mode::Help);
        state.update(Message::CloseHelp);
        assert_eq!(state.mode, Mode::Browse);

        assert_eq!(state.update(Message::QuitRequested), Command::Quit);
        assert_eq!(state.update(Message::ClearSearch), Command::ClearSearch);
        assert_eq!(state.update(Message::CancelDownload), Command::CancelDownload);
    }
}
