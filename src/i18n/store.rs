//! Active language with persistence and document side effects

use super::{Direction, Language, TranslationBundle};
use crate::document::{DocumentAttributes, DocumentHooks};
use crate::storage::PreferenceStorage;

/// Storage slot holding the preferred language code
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Owns the active language for one session
///
/// Until [`LanguageStore::initialize`] runs, every read returns the default
/// language. Initialization reads the persisted slot once.
pub struct LanguageStore {
    default: Language,
    active: Language,
    initialized: bool,
    storage: Box<dyn PreferenceStorage>,
    document: Box<dyn DocumentHooks>,
}

impl LanguageStore {
    pub fn new(
        default: Language,
        storage: Box<dyn PreferenceStorage>,
        document: Box<dyn DocumentHooks>,
    ) -> Self {
        Self {
            default,
            active: default,
            initialized: false,
            storage,
            document,
        }
    }

    /// Adopt the persisted language if it is valid, else the default.
    /// Runs once; later calls return the active language untouched.
    pub fn initialize(&mut self) -> Language {
        if self.initialized {
            return self.active;
        }
        self.initialized = true;

        let persisted = match self.storage.get(LANGUAGE_STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "language storage not available, using default");
                None
            }
        };

        self.active = match persisted.as_deref().map(|code| (code, Language::from_code(code))) {
            Some((_, Some(language))) => language,
            Some((code, None)) => {
                tracing::debug!(code, "ignoring unsupported persisted language");
                self.default
            }
            None => self.default,
        };

        tracing::info!(language = %self.active, "language initialized");
        self.apply_document();
        self.active
    }

    /// Switch to `code` and persist it. Unsupported codes are ignored.
    pub fn set_language(&mut self, code: &str) {
        match Language::from_code(code) {
            Some(language) => self.set(language),
            None => tracing::debug!(code, "ignoring unsupported language"),
        }
    }

    pub fn set(&mut self, language: Language) {
        let changed = language != self.active;
        self.active = language;

        if let Err(e) = self.storage.set(LANGUAGE_STORAGE_KEY, language.code()) {
            tracing::warn!(error = %e, language = %language, "failed to persist language");
        }

        if changed {
            tracing::info!(language = %language, "language changed");
            self.apply_document();
        }
    }

    pub fn language(&self) -> Language {
        self.active
    }

    pub fn direction(&self) -> Direction {
        self.active.direction()
    }

    pub fn translations(&self) -> &'static TranslationBundle {
        self.active.translations()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn apply_document(&mut self) {
        self.document
            .apply(&DocumentAttributes::for_language(self.active));
    }
}

impl std::fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageStore")
            .field("default", &self.default)
            .field("active", &self.active)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}
