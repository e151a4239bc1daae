//! Site-wide language and theme preferences
//!
//! [`SiteContext`] is passed to the components that need the language or the
//! theme instead of having them query the document. Persistence goes through
//! a [`PreferenceStore`] (browser `localStorage` on the site, a map in tests).

use std::collections::HashMap;

use folio_core::prelude::*;
use folio_core::{Language, Theme, LANGUAGE_STORAGE_KEY};

/// Key/value persistence for user preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, survives as long as the value does
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Current language and theme plus the store backing them
#[derive(Debug)]
pub struct SiteContext<S> {
    store: S,
    language: Language,
    theme: Theme,
}

impl<S: PreferenceStore> SiteContext<S> {
    /// Resolve the language from the store, then the browser locale
    pub fn load(store: S, browser_locale: Option<&str>) -> Self {
        let stored = store.get(LANGUAGE_STORAGE_KEY);
        let language = Language::resolve(stored.as_deref(), browser_locale);
        debug!(
            "Language resolved to {} (stored: {:?}, browser: {:?})",
            language, stored, browser_locale
        );
        Self {
            store,
            language,
            theme: Theme::default(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch language and persist it. A failed write keeps the in-memory
    /// value and is only logged.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if let Err(e) = self.store.set(LANGUAGE_STORAGE_KEY, language.code()) {
            warn!("Could not persist language preference: {}", e);
        }
    }

    pub fn toggle_language(&mut self) -> Language {
        self.set_language(self.language.toggled());
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::storage("quota exceeded"))
        }
    }

    #[test]
    fn test_defaults_to_browser_locale() {
        let ctx = SiteContext::load(MemoryStore::default(), Some("sl-SI"));
        assert_eq!(ctx.language(), Language::Sl);

        let ctx = SiteContext::load(MemoryStore::default(), None);
        assert_eq!(ctx.language(), Language::En);
    }

    #[test]
    fn test_language_toggle_persists_across_reload() {
        let mut ctx = SiteContext::load(MemoryStore::default(), Some("en-US"));
        assert_eq!(ctx.toggle_language(), Language::Sl);

        // reload: a fresh context over the same storage
        let ctx = SiteContext::load(ctx.into_store(), Some("en-US"));
        assert_eq!(ctx.language(), Language::Sl);

        let mut ctx = ctx;
        assert_eq!(ctx.toggle_language(), Language::En);
        let store = ctx.into_store();
        assert_eq!(store.get(LANGUAGE_STORAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn test_invalid_stored_value_is_ignored() {
        let mut store = MemoryStore::default();
        store.set(LANGUAGE_STORAGE_KEY, "de").unwrap();

        let ctx = SiteContext::load(store, Some("sl"));
        assert_eq!(ctx.language(), Language::Sl);
    }

    #[test]
    fn test_failed_persist_keeps_in_memory_value() {
        let mut ctx = SiteContext::load(ReadOnlyStore, None);
        ctx.set_language(Language::Sl);
        assert_eq!(ctx.language(), Language::Sl);
    }

    #[test]
    fn test_theme_toggle() {
        let mut ctx = SiteContext::load(MemoryStore::default(), None);
        assert_eq!(ctx.theme(), Theme::Dark);
        assert_eq!(ctx.toggle_theme(), Theme::Light);
        ctx.set_theme(Theme::Dark);
        assert_eq!(ctx.theme(), Theme::Dark);
    }
}
