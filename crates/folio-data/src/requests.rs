//! Data requests used by the site
//!
//! Each request logs and returns its error instead of propagating it, so a
//! failing table leaves the rest of the page renderable.

use folio_core::prelude::*;
use folio_core::{NavLink, Page, Project, SkillGroup};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::fetched::Fetched;
use crate::query::Query;
use crate::shape::group_skills;
use crate::store::LocalContentStore;

pub const PAGES_TABLE: &str = "pages";
pub const NAV_TABLE: &str = "nav_elements";
pub const SKILLS_TABLE: &str = "skills";
pub const PROJECTS_TABLE: &str = "projects";

/// Scope of the header navigation rows
pub const DEFAULT_NAV_SCOPE: &str = "header";

/// Column every scoped table is sorted by
const ORDER_COLUMN: &str = "order";

/// Fetch the single `pages` row whose slug is `key`
pub async fn get_page_data(store: &impl LocalContentStore, key: &str) -> Fetched<Page> {
    let query = Query::from(PAGES_TABLE).eq("slug", key).single();
    let result: Result<Page> = async {
        let row = store.fetch_one(&query).await?;
        Ok(serde_json::from_value(row)?)
    }
    .await;
    Fetched::from_result(&format!("Failed to load page {key:?}"), result)
}

/// Fetch the rows of `table` in `scope`, ordered by the `order` column
pub async fn get_data(
    store: &impl LocalContentStore,
    table: &str,
    scope: &str,
) -> Fetched<Vec<Value>> {
    let query = Query::from(table)
        .eq("scope", scope)
        .order(ORDER_COLUMN, true);
    let result = store.fetch_rows(&query).await;
    Fetched::from_result(&format!("Failed to load {table} for scope {scope:?}"), result)
}

/// Header navigation links for `scope`, in display order
pub async fn get_nav_links(store: &impl LocalContentStore, scope: &str) -> Fetched<Vec<NavLink>> {
    match get_data(store, NAV_TABLE, scope).await.into_result() {
        Ok(rows) => Fetched::from_result("Malformed navigation rows", decode_rows(rows)),
        // already logged by get_data
        Err(e) => Fetched::already_logged(e),
    }
}

/// All skills grouped by category in priority order
pub async fn get_skills(store: &impl LocalContentStore) -> Fetched<Vec<SkillGroup>> {
    let query = Query::from(SKILLS_TABLE).order(ORDER_COLUMN, true);
    let result: Result<Vec<SkillGroup>> =
        async { Ok(group_skills(store.fetch_rows(&query).await?)) }.await;
    Fetched::from_result("Failed to load skills", result)
}

/// All projects, in whatever order the store returns them
pub async fn get_projects(store: &impl LocalContentStore) -> Fetched<Vec<Project>> {
    let query = Query::from(PROJECTS_TABLE);
    let result: Result<Vec<Project>> =
        async { decode_rows(store.fetch_rows(&query).await?) }.await;
    Fetched::from_result("Failed to load projects", result)
}

fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(Error::from))
        .collect()
}

/// Everything the single-page site renders, with per-section fallbacks
#[derive(Debug, Clone, Default, Serialize)]
pub struct SiteContent {
    pub nav: Vec<NavLink>,
    pub about: Option<Page>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    /// One message per section that failed to load
    pub errors: Vec<String>,
}

/// Load every section of the site. Failed sections are left empty and
/// their error message recorded.
pub async fn load_site_content(store: &impl LocalContentStore, nav_scope: &str) -> SiteContent {
    let mut content = SiteContent::default();

    let (nav, err) = get_nav_links(store, nav_scope).await.into_parts();
    content.nav = nav.unwrap_or_default();
    content.errors.extend(err.map(|e| e.to_string()));

    let (about, err) = get_page_data(store, "about").await.into_parts();
    content.about = about;
    content.errors.extend(err.map(|e| e.to_string()));

    let (skills, err) = get_skills(store).await.into_parts();
    content.skills = skills.unwrap_or_default();
    content.errors.extend(err.map(|e| e.to_string()));

    let (projects, err) = get_projects(store).await.into_parts();
    content.projects = projects.unwrap_or_default();
    content.errors.extend(err.map(|e| e.to_string()));

    info!(
        "Loaded site content: {} nav links, {} skill groups, {} projects, {} errors",
        content.nav.len(),
        content.skills.len(),
        content.projects.len(),
        content.errors.len()
    );
    content
}
