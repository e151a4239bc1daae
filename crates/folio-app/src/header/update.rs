//! Main update function and message dispatch

use folio_core::prelude::*;

use super::layout::{section_at, PageLayout, ScrollMetrics};
use super::message::HeaderMessage;
use super::state::{HeaderState, ScrollMode, TimerToken};
use super::{HeaderAction, UpdateResult};

/// Process a message and return the side effects for the host
pub fn update(
    state: &mut HeaderState,
    message: HeaderMessage,
    layout: &impl PageLayout,
) -> UpdateResult {
    match message {
        HeaderMessage::Init => handle_init(state, layout),
        HeaderMessage::Scrolled => handle_scroll(state, layout),
        HeaderMessage::NavClicked { href } => handle_nav_click(state, &href, layout),
        HeaderMessage::DebounceElapsed(token) => handle_debounce_elapsed(state, token, layout),
        HeaderMessage::ScrollSettled => handle_scroll_settled(state, layout),
        HeaderMessage::ToggleMenu => {
            state.menu_open = !state.menu_open;
            UpdateResult::none()
        }
        HeaderMessage::ToggleTheme => {
            state.theme = state.theme.toggled();
            UpdateResult::action(HeaderAction::ApplyTheme(state.theme))
        }
        HeaderMessage::ToggleLanguage => {
            state.language = state.language.toggled();
            debug!("Language switched to {}", state.language);
            UpdateResult {
                actions: vec![
                    HeaderAction::PersistLanguage(state.language),
                    HeaderAction::ApplyLanguage(state.language),
                ],
                prevent_default: false,
            }
        }
        HeaderMessage::DocumentClicked { inside_menu } => {
            if state.menu_open && !inside_menu {
                state.menu_open = false;
            }
            UpdateResult::none()
        }
    }
}

fn handle_init(state: &mut HeaderState, layout: &impl PageLayout) -> UpdateResult {
    let metrics = layout.metrics();
    refresh_scroll_indicators(state, metrics);
    if !state.is_programmatic_scroll() {
        refresh_active_section(state, layout, metrics);
    }
    UpdateResult {
        actions: vec![
            HeaderAction::ApplyLanguage(state.language),
            HeaderAction::ApplyTheme(state.theme),
        ],
        prevent_default: false,
    }
}

/// Progress and the scrolled style follow every scroll; the active section
/// only follows user scrolling.
fn handle_scroll(state: &mut HeaderState, layout: &impl PageLayout) -> UpdateResult {
    let metrics = layout.metrics();
    refresh_scroll_indicators(state, metrics);

    match state.mode {
        ScrollMode::Idle => {
            refresh_active_section(state, layout, metrics);
            UpdateResult::none()
        }
        ScrollMode::ProgrammaticScroll { timer } => {
            // trailing-edge debounce: every scroll event restarts the quiet period
            let mut result = UpdateResult::action(HeaderAction::CancelTimer(timer));
            result.push(arm_debounce(state));
            result
        }
    }
}

fn handle_nav_click(state: &mut HeaderState, href: &str, layout: &impl PageLayout) -> UpdateResult {
    let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
        // external link, let the browser navigate
        return UpdateResult::none();
    };

    let mut result = UpdateResult {
        prevent_default: true,
        ..UpdateResult::default()
    };

    // highlight immediately, before the scroll animation catches up
    state.active_section = Some(id.to_string());

    let Some(target) = layout.section(id) else {
        warn!("Navigation target #{} not found", id);
        return result;
    };

    if let Some(pending) = state.pending_timer() {
        result.push(HeaderAction::CancelTimer(pending));
    }

    let top = target.top - layout.header_height();
    debug!("Scrolling to #{} at {}", id, top);
    result.push(HeaderAction::ScrollTo { top });
    result.push(arm_debounce(state));

    state.menu_open = false;
    result
}

fn handle_debounce_elapsed(
    state: &mut HeaderState,
    token: TimerToken,
    layout: &impl PageLayout,
) -> UpdateResult {
    if state.pending_timer() != Some(token) {
        trace!("Ignoring stale debounce timer {}", token.id());
        return UpdateResult::none();
    }
    finish_programmatic_scroll(state, layout);
    UpdateResult::none()
}

fn handle_scroll_settled(state: &mut HeaderState, layout: &impl PageLayout) -> UpdateResult {
    match state.pending_timer() {
        Some(timer) => {
            finish_programmatic_scroll(state, layout);
            UpdateResult::action(HeaderAction::CancelTimer(timer))
        }
        None => UpdateResult::none(),
    }
}

/// Back to `Idle`, reconciling the optimistic highlight with where the
/// scroll actually ended
fn finish_programmatic_scroll(state: &mut HeaderState, layout: &impl PageLayout) {
    state.mode = ScrollMode::Idle;
    let metrics = layout.metrics();
    refresh_scroll_indicators(state, metrics);
    refresh_active_section(state, layout, metrics);
}

fn arm_debounce(state: &mut HeaderState) -> HeaderAction {
    let token = state.issue_timer();
    state.mode = ScrollMode::ProgrammaticScroll { timer: token };
    HeaderAction::ArmTimer {
        token,
        delay: state.config.debounce,
    }
}

fn refresh_scroll_indicators(state: &mut HeaderState, metrics: ScrollMetrics) {
    state.progress = metrics.progress_percent();
    state.scrolled = metrics.scroll_y > state.config.scrolled_threshold;
}

/// No matching section leaves the previous highlight in place
fn refresh_active_section(state: &mut HeaderState, layout: &impl PageLayout, metrics: ScrollMetrics) {
    let sections = layout.sections();
    if let Some(section) = section_at(&sections, metrics.scroll_y, state.config.section_offset) {
        if state.active_section.as_deref() != Some(section.id.as_str()) {
            trace!("Active section: {}", section.id);
            state.active_section = Some(section.id.clone());
        }
    }
}
