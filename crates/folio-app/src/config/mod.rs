//! Configuration file parsing for Folio
//!
//! Supports:
//! - `folio.toml` - Server and store settings
//! - `PORT`, `FOLIO_STORE_URL`, `FOLIO_STORE_KEY` - Environment overrides

pub mod settings;
pub mod types;

pub use settings::{
    apply_env_overrides, apply_env_port_override, apply_overrides, apply_port_override,
    init_config, load_settings, load_with_env, CONFIG_FILENAME, PORT_ENV, STORE_KEY_ENV,
    STORE_URL_ENV,
};
pub use types::*;
