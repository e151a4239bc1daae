use folio_app::ToastQueue;
use leptos::prelude::*;

/// Closeable notifications, bottom-right
#[component]
pub fn Toasts(queue: RwSignal<ToastQueue>) -> impl IntoView {
    view! {
        <div class="toasts" aria-live="polite">
            <For
                each=move || queue.with(|q| q.iter().cloned().collect::<Vec<_>>())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast toast--{}", toast.kind.as_str()) role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                aria-label="Close"
                                on:click=move |_| {
                                    queue.update(|q| {
                                        q.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
