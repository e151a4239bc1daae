//! Settings parser for folio.toml

use super::types::Settings;
use folio_core::prelude::*;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "folio.toml";

pub const PORT_ENV: &str = "PORT";
pub const STORE_URL_ENV: &str = "FOLIO_STORE_URL";
pub const STORE_KEY_ENV: &str = "FOLIO_STORE_KEY";

/// Load settings from `dir/folio.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(dir: &Path) -> Settings {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply store overrides from `lookup` (environment variable name to value).
/// Empty values keep what the file says.
pub fn apply_overrides<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(STORE_URL_ENV).filter(|v| !v.is_empty()) {
        settings.store.url = Some(url);
    }

    if let Some(key) = lookup(STORE_KEY_ENV).filter(|v| !v.is_empty()) {
        settings.store.key = Some(key);
    }
}

/// Apply `PORT` from `lookup`. Only `serve` listens, so only `serve` asks.
pub fn apply_port_override<F>(settings: &mut Settings, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup(PORT_ENV) {
        settings.server.port = port
            .trim()
            .parse()
            .map_err(|e| Error::config(format!("Invalid {PORT_ENV} '{port}': {e}")))?;
    }
    Ok(())
}

/// Apply store overrides from the process environment
pub fn apply_env_overrides(settings: &mut Settings) {
    apply_overrides(settings, |name| std::env::var(name).ok());
}

/// Apply `PORT` from the process environment
pub fn apply_env_port_override(settings: &mut Settings) -> Result<()> {
    apply_port_override(settings, |name| std::env::var(name).ok())
}

/// Load `folio.toml` from `dir`, then layer the store environment on top
pub fn load_with_env(dir: &Path) -> Settings {
    let mut settings = load_settings(dir);
    apply_env_overrides(&mut settings);
    settings
}

/// Write a commented default `folio.toml` into `dir` unless one exists
pub fn init_config(dir: &Path) -> Result<bool> {
    let config_path = dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        return Ok(false);
    }

    let default_content = r#"# Folio configuration

[server]
port = 3000
dist_dir = "website/dist"

[store]
# url = "https://your-project.supabase.co"
# key = "public-anon-key"
"#;

    std::fs::write(&config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created {:?}", config_path);
    Ok(true)
}
