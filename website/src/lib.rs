pub mod components;
pub mod content;
pub mod dom;
pub mod pages;

use folio_app::preferences::SiteContext;
use folio_app::ToastQueue;
use folio_core::{Language, Theme};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use components::toasts::Toasts;
use dom::LocalStorageStore;
use pages::home::Home;

/// Language and theme, shared by the header and anything that translates
#[derive(Clone, Copy)]
pub struct Preferences {
    pub site: StoredValue<SiteContext<LocalStorageStore>, LocalStorage>,
    pub language: RwSignal<Language>,
    pub theme: RwSignal<Theme>,
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = SiteContext::load(LocalStorageStore::new(), dom::browser_locale().as_deref());
    let prefs = Preferences {
        language: RwSignal::new(site.language()),
        theme: RwSignal::new(site.theme()),
        site: StoredValue::new_local(site),
    };
    let toasts = RwSignal::new(ToastQueue::default());
    let content = LocalResource::new(content::load);

    let page = move || {
        view! {
            <Suspense fallback=|| view! { <div class="loading">"Loading…"</div> }>
                {move || Suspend::new(async move {
                    let content = content.await;
                    view! { <Home content=content prefs=prefs toasts=toasts /> }
                })}
            </Suspense>
        }
    };

    view! {
        <Title text="Portfolio" />
        <Meta name="description" content="Personal portfolio: about, skills, projects and contact." />
        <Router>
            <Routes fallback=|| "Page not found.">
                <Route path=path!("/") view=page />
            </Routes>
        </Router>
        <Toasts queue=toasts />
    }
}
