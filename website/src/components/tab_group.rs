use folio_app::TabGroupState;
use leptos::ev;
use leptos::prelude::*;

/// One tab button: optional icon plus label
#[derive(Debug, Clone)]
pub struct TabLabel {
    pub icon: Option<String>,
    pub label: String,
}

impl TabLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            icon: None,
            label: label.into(),
        }
    }

    pub fn with_icon(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            label: label.into(),
        }
    }
}

/// Tab buttons with arrow-key navigation. Panels are rendered by the caller
/// and shown when `tabs` selects their index.
#[component]
pub fn TabList(
    tabs: RwSignal<TabGroupState>,
    labels: Vec<TabLabel>,
    #[prop(into)] class: String,
) -> impl IntoView {
    let on_keydown = move |event: ev::KeyboardEvent| match event.key().as_str() {
        "ArrowRight" => {
            event.prevent_default();
            tabs.update(|t| t.select_next());
        }
        "ArrowLeft" => {
            event.prevent_default();
            tabs.update(|t| t.select_previous());
        }
        _ => {}
    };

    let button_class = format!("{class}__btn");
    let icon_class = format!("{class}__icon");
    let selected_class = format!("{class}__btn--selected");

    let buttons = labels
        .into_iter()
        .enumerate()
        .map(|(index, tab)| {
            let selected = move || tabs.with(|t| t.is_selected(index));
            let (plain, highlighted) = (
                button_class.clone(),
                format!("{button_class} {selected_class}"),
            );
            view! {
                <button
                    role="tab"
                    class=move || if selected() { highlighted.clone() } else { plain.clone() }
                    aria-selected=move || selected().to_string()
                    tabindex=move || if selected() { "0" } else { "-1" }
                    on:click=move |_| {
                        tabs.update(|t| {
                            t.select(index);
                        });
                    }
                >
                    {tab.icon.map(|icon| view! { <span class=icon_class.clone()>{icon}</span> })}
                    {tab.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div role="tablist" class=format!("{class}__header") on:keydown=on_keydown>
            {buttons}
        </div>
    }
}
