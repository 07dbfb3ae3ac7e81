//! Explicitly passed application context

use super::LanguageStore;
use crate::error::{ProviderContext, SiteResult};
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;

/// Values provided at the application root and handed down explicitly
///
/// Reading a value that was never provided is a programming error and is
/// reported as [`crate::SiteError::MissingProvider`].
#[derive(Default)]
pub struct SiteContext {
    values: HashMap<TypeId, Box<dyn Any>>,
}

impl SiteContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide a value, replacing any earlier value of the same type
    pub fn provide<T: 'static>(&mut self, value: T) -> &mut Self {
        self.values.insert(TypeId::of::<T>(), Box::new(value));
        self
    }

    pub fn get<T: 'static>(&self) -> SiteResult<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
            .context_provider(type_name::<T>())
    }

    pub fn get_mut<T: 'static>(&mut self) -> SiteResult<&mut T> {
        self.values
            .get_mut(&TypeId::of::<T>())
            .and_then(|value| value.downcast_mut::<T>())
            .context_provider(type_name::<T>())
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<T>())
    }
}

impl std::fmt::Debug for SiteContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteContext")
            .field("values", &self.values.len())
            .finish()
    }
}

pub fn use_language(context: &SiteContext) -> SiteResult<&LanguageStore> {
    context.get::<LanguageStore>()
}

pub fn use_language_mut(context: &mut SiteContext) -> SiteResult<&mut LanguageStore> {
    context.get_mut::<LanguageStore>()
}
