use crate::download::Whitepaper;
use crate::i18n::Language;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    UpdateSearch(String),
    ClearSearch,
    SetLanguage(Language),
    StartDownload(&'static Whitepaper),
    CancelDownload,
    Quit,
}
