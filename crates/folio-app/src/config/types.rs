//! Configuration types for Folio
//!
//! Defines:
//! - `Settings` - Root of `folio.toml`
//! - `ServerSettings`, `StoreSettings` - Per-section settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Port used when neither `folio.toml` nor `PORT` sets one
pub const DEFAULT_PORT: u16 = 3000;

/// Application settings (folio.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

/// Static server settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Built site to serve
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("website/dist")
}

/// Hosted content store
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreSettings {
    /// Project URL, e.g. `https://example.supabase.co`
    #[serde(default)]
    pub url: Option<String>,

    /// Public (anon) API key
    #[serde(default)]
    pub key: Option<String>,
}

impl StoreSettings {
    /// Both URL and key, when configured
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.url.as_deref(), self.key.as_deref()) {
            (Some(url), Some(key)) if !url.is_empty() => Some((url, key)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_sections_use_field_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[server]
dist_dir = "public"

[store]
key = "anon"
"#,
        )
        .unwrap();

        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.server.dist_dir, PathBuf::from("public"));
        assert_eq!(settings.store.key.as_deref(), Some("anon"));
        assert!(settings.store.url.is_none());
    }

    #[test]
    fn test_store_credentials_need_both_values() {
        let mut store = StoreSettings {
            url: Some("https://example.supabase.co".into()),
            key: None,
        };
        assert!(store.credentials().is_none());

        store.key = Some("anon".into());
        assert_eq!(
            store.credentials(),
            Some(("https://example.supabase.co", "anon"))
        );

        store.url = Some(String::new());
        assert!(store.credentials().is_none());
    }
}
