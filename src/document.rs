//! Document-level attributes driven by the active language

use crate::i18n::{Direction, Language};
use std::cell::RefCell;
use std::rc::Rc;

/// Name of the styling hook attribute carrying the language code
pub const LANGUAGE_HOOK_ATTRIBUTE: &str = "data-language";

/// The three attributes written whenever the active language changes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentAttributes {
    pub dir: Direction,
    pub lang: &'static str,
    pub hook: (&'static str, &'static str),
}

impl DocumentAttributes {
    pub fn for_language(language: Language) -> Self {
        Self {
            dir: language.direction(),
            lang: language.code(),
            hook: (LANGUAGE_HOOK_ATTRIBUTE, language.code()),
        }
    }
}

/// Receives document attribute updates. One call carries all attributes.
pub trait DocumentHooks {
    fn apply(&mut self, attributes: &DocumentAttributes);
}

/// Records every update. Clones share the history.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    history: Rc<RefCell<Vec<DocumentAttributes>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<DocumentAttributes> {
        self.history.borrow().last().cloned()
    }

    pub fn update_count(&self) -> usize {
        self.history.borrow().len()
    }
}

impl DocumentHooks for MemoryDocument {
    fn apply(&mut self, attributes: &DocumentAttributes) {
        self.history.borrow_mut().push(attributes.clone());
    }
}

/// Logs updates. Used by the terminal front end, which has no document.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDocument;

impl DocumentHooks for TracingDocument {
    fn apply(&mut self, attributes: &DocumentAttributes) {
        tracing::debug!(
            dir = attributes.dir.as_str(),
            lang = attributes.lang,
            hook = attributes.hook.0,
            "document attributes applied"
        );
    }
}
