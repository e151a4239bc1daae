use folio_app::ToastQueue;
use folio_data::SiteContent;
use leptos::prelude::*;

use crate::components::about_tabs::AboutTabs;
use crate::components::contact_form::ContactFormView;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::projects_tabs::ProjectsTabs;
use crate::components::skills_tabs::SkillsTabs;
use crate::content::nav_or_default;
use crate::Preferences;

/// The whole one-page site
#[component]
pub fn Home(
    content: SiteContent,
    prefs: Preferences,
    toasts: RwSignal<ToastQueue>,
) -> impl IntoView {
    let SiteContent {
        nav,
        about,
        skills,
        projects,
        errors,
    } = content;

    let (title, subtitle, intro) = match &about {
        Some(page) => (
            page.title.clone(),
            page.subtitle.clone().unwrap_or_default(),
            page.content.clone().unwrap_or_default(),
        ),
        None => ("Portfolio".to_string(), String::new(), String::new()),
    };
    let owner = title.clone();

    view! {
        <Header links=nav_or_default(&nav) prefs=prefs />
        <main class="main">
            <section id="home" class="hero">
                <h1 class="hero__title">{title}</h1>
                <p class="hero__subtitle">{subtitle}</p>
                <a href="#contact" class="hero__cta">"Get in touch"</a>
            </section>

            {(!errors.is_empty())
                .then(|| {
                    view! {
                        <div class="content-warning" role="alert">
                            "Some sections could not be loaded."
                        </div>
                    }
                })}

            <section id="about" class="section about">
                <h2 class="section__title">"About"</h2>
                <p class="about__intro">{intro}</p>
                <AboutTabs page=about />
            </section>

            <section id="skills" class="section skills">
                <h2 class="section__title">"Skills"</h2>
                <SkillsTabs groups=skills />
            </section>

            <section id="projects" class="section projects">
                <h2 class="section__title">"Projects"</h2>
                <ProjectsTabs projects=projects />
            </section>

            <section id="contact" class="section contact">
                <h2 class="section__title">"Contact"</h2>
                <ContactFormView toasts=toasts />
            </section>
        </main>
        <Footer owner=owner />
    }
}
