//! `folio content`: fetch everything the site renders and print it as JSON

use folio_app::config::{StoreSettings, STORE_KEY_ENV, STORE_URL_ENV};
use folio_core::prelude::*;
use folio_data::{load_site_content, ContentStore, RestStore, SiteContent};

/// Build a store client from configured credentials
pub fn store_from_settings(settings: &StoreSettings) -> Result<RestStore> {
    let Some((url, key)) = settings.credentials() else {
        return Err(Error::config(format!(
            "Content store is not configured; set [store] url/key in folio.toml or {} and {}",
            STORE_URL_ENV, STORE_KEY_ENV
        )));
    };
    RestStore::new(url, key)
}

/// Load the site content and render it as pretty JSON.
///
/// Sections that fail to load are empty in the output and listed under
/// `errors`; the dump itself only fails on serialization.
pub async fn dump(store: &impl ContentStore, nav_scope: &str) -> Result<(SiteContent, String)> {
    let content = load_site_content(store, nav_scope).await;
    let json = serde_json::to_string_pretty(&content)?;
    Ok((content, json))
}
