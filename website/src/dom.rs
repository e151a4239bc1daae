//! Browser glue: page geometry, preference storage, document attributes

use std::time::Duration;

use folio_app::header::{PageLayout, ScrollMetrics, SectionBounds};
use folio_app::preferences::PreferenceStore;
use folio_core::prelude::*;
use folio_core::theme::THEME_ATTRIBUTE;
use folio_core::{Language, Theme};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, EventTarget, HtmlElement, Node, ScrollBehavior, ScrollToOptions};

const HEADER_SELECTOR: &str = ".header";

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

fn root_element() -> Option<Element> {
    document()?.document_element()
}

fn bounds_of(element: &HtmlElement) -> SectionBounds {
    SectionBounds::new(
        element.id(),
        f64::from(element.offset_top()),
        f64::from(element.offset_height()),
    )
}

/// The live page, read straight from the DOM on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct DomLayout;

impl PageLayout for DomLayout {
    fn metrics(&self) -> ScrollMetrics {
        let Some(window) = web_sys::window() else {
            return ScrollMetrics::default();
        };
        ScrollMetrics {
            scroll_y: window.scroll_y().unwrap_or_default(),
            scroll_height: root_element()
                .map(|root| f64::from(root.scroll_height()))
                .unwrap_or_default(),
            viewport_height: window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or_default(),
        }
    }

    fn sections(&self) -> Vec<SectionBounds> {
        let Some(nodes) = document().and_then(|d| d.query_selector_all("section[id]").ok()) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|element| bounds_of(&element))
            .collect()
    }

    fn header_height(&self) -> f64 {
        document()
            .and_then(|d| d.query_selector(HEADER_SELECTOR).ok().flatten())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|header| f64::from(header.offset_height()))
            .unwrap_or(0.0)
    }

    fn section(&self, id: &str) -> Option<SectionBounds> {
        let element = document()?.get_element_by_id(id)?;
        if element.tag_name() != "SECTION" {
            return None;
        }
        element.dyn_into::<HtmlElement>().ok().map(|el| bounds_of(&el))
    }
}

pub fn scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Set `<html lang>`
pub fn apply_language(language: Language) {
    if let Some(root) = root_element() {
        if let Err(e) = root.set_attribute("lang", language.code()) {
            warn!("Could not set html lang: {:?}", e);
        }
    }
}

/// Set `<html data-theme>`
pub fn apply_theme(theme: Theme) {
    if let Some(root) = root_element() {
        if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
            warn!("Could not set theme attribute: {:?}", e);
        }
    }
}

pub fn browser_locale() -> Option<String> {
    web_sys::window()?.navigator().language()
}

/// Whether an event target lies inside `element`
pub fn contains_target(element: &Element, target: Option<EventTarget>) -> bool {
    target
        .as_ref()
        .and_then(|t| t.dyn_ref::<Node>())
        .is_some_and(|node| element.contains(Some(node)))
}

/// Resolve after `duration` using the browser timer
pub async fn sleep(duration: Duration) -> Result<()> {
    let Some(window) = web_sys::window() else {
        return Err(Error::delivery("no window to schedule a timer on"));
    };
    let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);

    let mut scheduled = Ok(0);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
    });
    scheduled.map_err(|e| Error::delivery(format!("setTimeout failed: {:?}", e)))?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| Error::delivery(format!("{:?}", e)))
}

/// `localStorage`, absent in private modes or sandboxed frames
pub struct LocalStorageStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage unavailable; preferences will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| Error::storage("localStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|e| Error::storage(format!("{:?}", e)))
    }
}
