use std::collections::HashMap;

use folio_app::header::{
    update, HeaderAction, HeaderConfig, HeaderMessage, HeaderState, TimerToken,
};
use folio_core::prelude::*;
use folio_core::{NavLink, Theme};
use leptos::ev;
use leptos::prelude::*;

use crate::dom::{self, DomLayout};
use crate::Preferences;

/// Everything an event handler needs to drive the header controller
#[derive(Clone, Copy)]
struct Controller {
    state: RwSignal<HeaderState>,
    timers: StoredValue<HashMap<TimerToken, TimeoutHandle>>,
    prefs: Preferences,
}

impl Controller {
    /// Run one message through `update`, then perform its actions.
    /// Returns whether the triggering event's default should be prevented.
    fn dispatch(self, message: HeaderMessage) -> bool {
        let result = self
            .state
            .try_update(|state| update(state, message, &DomLayout))
            .unwrap_or_default();
        for action in result.actions {
            self.perform(action);
        }
        result.prevent_default
    }

    fn perform(self, action: HeaderAction) {
        match action {
            HeaderAction::ScrollTo { top } => dom::scroll_to(top),
            HeaderAction::ArmTimer { token, delay } => {
                let fired = move || {
                    self.timers.update_value(|timers| {
                        timers.remove(&token);
                    });
                    self.dispatch(HeaderMessage::DebounceElapsed(token));
                };
                match set_timeout_with_handle(fired, delay) {
                    Ok(handle) => self.timers.update_value(|timers| {
                        timers.insert(token, handle);
                    }),
                    Err(e) => warn!("Could not arm scroll timer: {:?}", e),
                }
            }
            HeaderAction::CancelTimer(token) => {
                if let Some(handle) = self
                    .timers
                    .try_update_value(|timers| timers.remove(&token))
                    .flatten()
                {
                    handle.clear();
                }
            }
            HeaderAction::PersistLanguage(language) => {
                self.prefs.site.update_value(|site| site.set_language(language));
            }
            HeaderAction::ApplyLanguage(language) => {
                dom::apply_language(language);
                self.prefs.language.set(language);
            }
            HeaderAction::ApplyTheme(theme) => {
                dom::apply_theme(theme);
                self.prefs.site.update_value(|site| site.set_theme(theme));
                self.prefs.theme.set(theme);
            }
        }
    }
}

#[component]
pub fn Header(links: Vec<NavLink>, prefs: Preferences) -> impl IntoView {
    let mut initial = HeaderState::new(
        HeaderConfig::default(),
        links.clone(),
        prefs.language.get_untracked(),
    );
    initial.theme = prefs.theme.get_untracked();

    let ctl = Controller {
        state: RwSignal::new(initial),
        timers: StoredValue::new(HashMap::new()),
        prefs,
    };
    let state = ctl.state;

    let nav_ref = NodeRef::<leptos::html::Nav>::new();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();

    Effect::new(move |_| {
        ctl.dispatch(HeaderMessage::Init);
    });

    let scroll = window_event_listener(ev::scroll, move |_| {
        ctl.dispatch(HeaderMessage::Scrolled);
    });
    let settled = window_event_listener(ev::Custom::<ev::Event>::new("scrollend"), move |_| {
        ctl.dispatch(HeaderMessage::ScrollSettled);
    });
    let outside = window_event_listener(ev::click, move |event| {
        let target = event.target();
        let inside_menu = nav_ref
            .get_untracked()
            .is_some_and(|nav| dom::contains_target(&nav, target.clone()))
            || toggle_ref
                .get_untracked()
                .is_some_and(|toggle| dom::contains_target(&toggle, target));
        ctl.dispatch(HeaderMessage::DocumentClicked { inside_menu });
    });

    on_cleanup(move || {
        scroll.remove();
        settled.remove();
        outside.remove();
        ctl.timers.update_value(|timers| {
            for (_, handle) in timers.drain() {
                handle.clear();
            }
        });
    });

    let nav_items = links
        .into_iter()
        .map(|link| {
            let href = link.href.clone();
            let active_href = link.href.clone();
            let label = move || state.with(|s| s.label_for(&link));
            view! {
                <li class="nav__item">
                    <a
                        href=href.clone()
                        class="nav__link"
                        class=("nav__link--active", move || state.with(|s| s.is_active(&active_href)))
                        on:click=move |event: ev::MouseEvent| {
                            if ctl.dispatch(HeaderMessage::NavClicked { href: href.clone() }) {
                                event.prevent_default();
                            }
                        }
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="header" class=("header--scrolled", move || state.with(|s| s.scrolled))>
            <div class="header__progress">
                <div
                    class="header__progress-bar"
                    style:width=move || format!("{:.2}%", state.with(|s| s.progress))
                ></div>
            </div>
            <div class="header__inner">
                <a href="#home" class="header__logo">"Portfolio"</a>

                <nav
                    class="nav"
                    class=("nav--open", move || state.with(|s| s.menu_open))
                    node_ref=nav_ref
                >
                    <ul class="nav__list">{nav_items}</ul>
                </nav>

                <div class="header__actions">
                    <button
                        class="header__lang-toggle"
                        aria-label="Switch language"
                        on:click=move |_| {
                            ctl.dispatch(HeaderMessage::ToggleLanguage);
                        }
                    >
                        {move || state.with(|s| s.language.code().to_uppercase())}
                    </button>
                    <button
                        class="header__theme-toggle"
                        aria-label="Toggle theme"
                        on:click=move |_| {
                            ctl.dispatch(HeaderMessage::ToggleTheme);
                        }
                    >
                        {move || match state.with(|s| s.theme) {
                            Theme::Dark => "☀️",
                            Theme::Light => "🌙",
                        }}
                    </button>
                    <button
                        class="header__mobile-toggle"
                        aria-label="Menu"
                        aria-expanded=move || state.with(|s| s.menu_open).to_string()
                        node_ref=toggle_ref
                        on:click=move |_| {
                            ctl.dispatch(HeaderMessage::ToggleMenu);
                        }
                    >
                        <span
                            class="header__hamburger"
                            class=("header__hamburger--open", move || state.with(|s| s.menu_open))
                        ></span>
                    </button>
                </div>
            </div>
        </header>
    }
}
