//! folio-data - Read-only access to the hosted content store
//!
//! The store is a PostgREST-style table API (`pages`, `nav_elements`,
//! `skills`, `projects`). This crate builds the queries, runs them through a
//! [`ContentStore`], and reshapes the rows for presentation.
//!
//! Every request function returns a [`Fetched`] pair: a value or an error,
//! never a panic. Errors are logged where they happen.

pub mod fetched;
pub mod query;
pub mod requests;
pub mod shape;
pub mod store;

pub use fetched::Fetched;
pub use query::Query;
pub use requests::{
    get_data, get_nav_links, get_page_data, get_projects, get_skills, load_site_content,
    SiteContent, DEFAULT_NAV_SCOPE, NAV_TABLE, PAGES_TABLE, PROJECTS_TABLE, SKILLS_TABLE,
};
pub use shape::{group_skills, CATEGORY_PRIORITY};
pub use store::{ContentStore, LocalContentStore, RestStore};
