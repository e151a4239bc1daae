//! Site content, fetched once on load

use folio_core::prelude::*;
use folio_core::NavLink;
use folio_data::{load_site_content, RestStore, SiteContent, DEFAULT_NAV_SCOPE};

/// Sections every build has, used when the store returns no navigation
const DEFAULT_SECTIONS: [&str; 4] = ["about", "skills", "projects", "contact"];

/// Store coordinates baked in at build time
const STORE_URL: Option<&str> = option_env!("FOLIO_STORE_URL");
const STORE_KEY: Option<&str> = option_env!("FOLIO_STORE_KEY");

pub async fn load() -> SiteContent {
    let (Some(url), Some(key)) = (STORE_URL, STORE_KEY) else {
        warn!("FOLIO_STORE_URL/FOLIO_STORE_KEY were not set at build time; rendering without content");
        return SiteContent {
            errors: vec!["Content store is not configured".to_string()],
            ..SiteContent::default()
        };
    };

    match RestStore::new(url, key) {
        Ok(store) => load_site_content(&store, DEFAULT_NAV_SCOPE).await,
        Err(e) => {
            error!("Invalid content store settings: {}", e);
            SiteContent {
                errors: vec![e.to_string()],
                ..SiteContent::default()
            }
        }
    }
}

/// Navigation to render: the stored links, or one per built-in section
pub fn nav_or_default(nav: &[NavLink]) -> Vec<NavLink> {
    if !nav.is_empty() {
        return nav.to_vec();
    }
    DEFAULT_SECTIONS
        .iter()
        .map(|id| NavLink::new(format!("#{id}"), *id))
        .collect()
}
