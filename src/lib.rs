//! Folio Library
//!
//! Command-line side of the portfolio site: a static server for the built
//! website and a content dump for checking what the store returns.

// Module declarations
pub mod content;
pub mod server;

// Re-export main entry points
pub use content::{dump, store_from_settings};
pub use server::{run as run_server, ServerConfig};
