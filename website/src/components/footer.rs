use leptos::prelude::*;

#[component]
pub fn Footer(#[prop(into)] owner: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <p>{format!("\u{00A9} {owner}. All rights reserved.")}</p>
                <a href="#home" class="footer__top">"Back to top"</a>
            </div>
        </footer>
    }
}
