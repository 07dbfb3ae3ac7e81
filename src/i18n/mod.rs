//! Language preference, text direction and translation lookup

pub mod bundle;
pub mod context;
pub mod store;


use serde::{Deserialize, Serialize};
use std::fmt;

pub use bundle::{
    CountdownStrings, DownloadStrings, HeroStrings, NavStrings, SearchStrings, TranslationBundle,
};
pub use context::{SiteContext, use_language, use_language_mut};
pub use store::{LANGUAGE_STORAGE_KEY, LanguageStore};

/// Supported site languages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
    Uz,
    Ru,
    Ar,
    Es,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Tr,
        Language::Uz,
        Language::Ru,
        Language::Ar,
        Language::Es,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
            Language::Uz => "uz",
            Language::Ru => "ru",
            Language::Ar => "ar",
            Language::Es => "es",
        }
    }

    /// Name of the language in that language
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Tr => "Türkçe",
            Language::Uz => "Oʻzbekcha",
            Language::Ru => "Русский",
            Language::Ar => "العربية",
            Language::Es => "Español",
        }
    }

    /// Parse an exact language code. Anything unsupported is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.code() == code)
    }

    pub fn direction(self) -> Direction {
        if RTL_LANGUAGES.contains(&self) {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    pub fn translations(self) -> &'static TranslationBundle {
        bundle::for_language(self)
    }

    /// Next language in the switcher order, wrapping around
    pub fn cycle(self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|language| *language == self)
            .unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Languages written right to left
pub const RTL_LANGUAGES: &[Language] = &[Language::Ar];

/// Text direction of the document
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
