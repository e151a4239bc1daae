//! Header controller state

use std::time::Duration;

use folio_core::{translate_nav, Language, NavLink, Theme};

/// Quiet period after the last scroll event before a programmatic scroll is
/// considered finished
pub const DEFAULT_SCROLL_DEBOUNCE_MS: u64 = 150;

/// `scroll_y` above which the header switches to its compact style
pub const DEFAULT_SCROLLED_THRESHOLD: f64 = 50.0;

/// Distance below the viewport top at which the active section is probed
pub const DEFAULT_SECTION_OFFSET: f64 = 100.0;

/// Tunables of the header controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderConfig {
    pub debounce: Duration,
    pub scrolled_threshold: f64,
    pub section_offset: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_SCROLL_DEBOUNCE_MS),
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
            section_offset: DEFAULT_SECTION_OFFSET,
        }
    }
}

/// Handle of an armed debounce timer.
///
/// Tokens are never reused, so an elapsed notification for a timer that was
/// cancelled in the meantime can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMode {
    /// Scroll position reflects user input; the active section tracks it
    #[default]
    Idle,
    /// A click-triggered smooth scroll is in flight; the active section is frozen
    ProgrammaticScroll { timer: TimerToken },
}

#[derive(Debug, Clone)]
pub struct HeaderState {
    pub config: HeaderConfig,
    pub nav_links: Vec<NavLink>,
    pub menu_open: bool,
    pub theme: Theme,
    pub language: Language,
    pub mode: ScrollMode,
    /// Id of the highlighted section; at most one at a time
    pub active_section: Option<String>,
    /// Compact header style once the page is scrolled
    pub scrolled: bool,
    /// Reading progress, 0..=100
    pub progress: f64,
    next_timer: u64,
}

impl HeaderState {
    pub fn new(config: HeaderConfig, nav_links: Vec<NavLink>, language: Language) -> Self {
        Self {
            config,
            nav_links,
            menu_open: false,
            theme: Theme::default(),
            language,
            mode: ScrollMode::Idle,
            active_section: None,
            scrolled: false,
            progress: 0.0,
            next_timer: 0,
        }
    }

    pub fn is_programmatic_scroll(&self) -> bool {
        matches!(self.mode, ScrollMode::ProgrammaticScroll { .. })
    }

    pub fn pending_timer(&self) -> Option<TimerToken> {
        match self.mode {
            ScrollMode::ProgrammaticScroll { timer } => Some(timer),
            ScrollMode::Idle => None,
        }
    }

    /// Whether the link pointing at `href` carries the active marker
    pub fn is_active(&self, href: &str) -> bool {
        match (&self.active_section, href.strip_prefix('#')) {
            (Some(active), Some(id)) => active == id,
            _ => false,
        }
    }

    /// Uppercased, translated label for a nav link. Non-anchor links keep
    /// their stored label.
    pub fn label_for(&self, link: &NavLink) -> String {
        match link.section_id() {
            Some(id) => translate_nav(self.language, id).to_uppercase(),
            None => link.label.to_uppercase(),
        }
    }

    pub(crate) fn issue_timer(&mut self) -> TimerToken {
        self.next_timer += 1;
        TimerToken(self.next_timer)
    }
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new(HeaderConfig::default(), Vec::new(), Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_tokens_are_unique() {
        let mut state = HeaderState::default();
        let a = state.issue_timer();
        let b = state.issue_timer();
        assert_ne!(a, b);
        assert!(b.id() > a.id());
    }

    #[test]
    fn test_is_active_matches_anchor_only() {
        let mut state = HeaderState::default();
        state.active_section = Some("skills".into());
        assert!(state.is_active("#skills"));
        assert!(!state.is_active("#about"));
        assert!(!state.is_active("skills"));
    }

    #[test]
    fn test_label_translation() {
        let mut state = HeaderState::default();
        let link = NavLink::new("#about", "About");
        assert_eq!(state.label_for(&link), "ABOUT");

        state.language = Language::Sl;
        assert_eq!(state.label_for(&link), "O MENI");

        let external = NavLink::new("https://github.com/me", "GitHub");
        assert_eq!(state.label_for(&external), "GITHUB");
    }
}
