//! # folio-core - Core Domain Types
//!
//! Foundation crate for Folio. Provides the content records shown on the
//! portfolio site, language and theme preferences, error handling, and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Content (`content`)
//! - [`NavLink`] - Header navigation entry (anchor + label)
//! - [`SkillEntry`], [`SkillGroup`] - Skills grouped by category with derived proficiency
//! - [`Project`] - Portfolio project, grouped by category for tab filtering
//! - [`Page`] - Single page record keyed by slug
//! - [`PersonalStats`], [`TimelineItem`], [`Achievement`], [`Testimonial`] - About section
//!
//! ### Preferences (`i18n`, `theme`)
//! - [`Language`] - Supported site languages (`en`, `sl`)
//! - [`translate_nav()`] - Navigation label lookup per language
//! - [`Theme`] - Dark/light visual theme
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum, one variant family per layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Log an error under a context message
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod i18n;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod theme;

/// Prelude for common imports used throughout all Folio crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use content::{
    group_projects_by_category, proficiency, Achievement, NavLink, Page, PersonalStats, Project,
    ProjectCategory, SkillEntry, SkillGroup, Testimonial, TimelineItem, PROFICIENCY_CAP,
};
pub use error::{Error, Result, ResultExt};
pub use i18n::{translate_nav, Language, LANGUAGE_STORAGE_KEY};
pub use theme::Theme;
