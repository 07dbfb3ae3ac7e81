use crate::i18n::Language;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Search events
    QueryChanged(String),
    ClearSearch,
    SearchCommitted(String),
    SelectUp,
    SelectDown,

    // Download events
    StartDownload,
    CancelDownload,

    // Language events
    CycleLanguage,
    LanguageChanged(Language),

    // UI events
    ShowHelp,
    CloseHelp,
    QuitRequested,
}
