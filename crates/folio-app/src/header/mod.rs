//! Header controller - TEA update function for the site header
//!
//! Organized into submodules:
//! - `state`: HeaderState, scroll mode and timer tokens
//! - `message`: HeaderMessage inputs
//! - `update`: Main update() function and message dispatch
//! - `layout`: PageLayout trait and scroll geometry
//!
//! The controller never touches the DOM. It reads geometry through
//! [`PageLayout`] and returns [`HeaderAction`]s for the host to perform.

pub mod layout;
pub mod message;
pub mod state;
pub(crate) mod update;


use std::time::Duration;

use folio_core::{Language, Theme};

pub use layout::{section_at, PageLayout, ScrollMetrics, SectionBounds};
pub use message::HeaderMessage;
pub use state::{
    HeaderConfig, HeaderState, ScrollMode, TimerToken, DEFAULT_SCROLLED_THRESHOLD,
    DEFAULT_SCROLL_DEBOUNCE_MS, DEFAULT_SECTION_OFFSET,
};

// Re-export main entry point
pub use update::update;

/// Side effects the host performs after update
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderAction {
    /// Smooth-scroll the window to `top`
    ScrollTo { top: f64 },

    /// Start a one-shot timer; deliver `HeaderMessage::DebounceElapsed(token)` after `delay`
    ArmTimer { token: TimerToken, delay: Duration },

    /// Clear a previously armed timer
    CancelTimer(TimerToken),

    /// Write the language preference to persistent storage
    PersistLanguage(Language),

    /// Set `<html lang>`
    ApplyLanguage(Language),

    /// Set `<html data-theme>`
    ApplyTheme(Theme),
}

/// Result of processing a message
#[derive(Debug, Default, PartialEq)]
pub struct UpdateResult {
    /// Actions to perform, in order
    pub actions: Vec<HeaderAction>,
    /// The triggering DOM event should not run its default behavior
    pub prevent_default: bool,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn action(action: HeaderAction) -> Self {
        Self {
            actions: vec![action],
            prevent_default: false,
        }
    }

    pub(crate) fn push(&mut self, action: HeaderAction) {
        self.actions.push(action);
    }
}
