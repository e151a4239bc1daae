//! folio-app - Site behavior for Folio
//!
//! This crate holds everything on the site that has state but no markup:
//! the header controller (TEA pattern), language/theme preferences, the
//! contact form, counters, tab selection, toasts, and configuration loading.
//! Hosts (the Leptos site, tests) feed it events and perform the returned
//! actions.

pub mod animation;
pub mod config;
pub mod contact;
pub mod header;
pub mod preferences;
pub mod tabs;
pub mod toast;

// Re-export primary types
pub use animation::{CounterAnimation, StatsAnimation};
pub use config::Settings;
pub use contact::{ContactForm, ContactSubmitter, LocalContactSubmitter, SubmitStatus};
pub use header::{update, HeaderAction, HeaderMessage, HeaderState, PageLayout, UpdateResult};
pub use preferences::{MemoryStore, PreferenceStore, SiteContext};
pub use tabs::TabGroupState;
pub use toast::{Toast, ToastQueue};
