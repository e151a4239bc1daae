use folio_app::animation::{StatsAnimation, COUNTER_TICK, STATS_START_DELAY};
use folio_app::TabGroupState;
use folio_core::content::format_thousands;
use folio_core::prelude::*;
use folio_core::{Achievement, Page, PersonalStats, Testimonial, TimelineItem};
use leptos::prelude::*;
use serde::de::DeserializeOwned;

use super::tab_group::{TabLabel, TabList};

/// Decode one JSON column of the about page, empty when missing or malformed
fn page_section<T: DeserializeOwned + Default>(page: Option<&Page>, key: &str) -> T {
    let Some(page) = page else {
        return T::default();
    };
    match page.section::<T>(key) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            warn!("About page column '{}' is malformed: {}", key, e);
            T::default()
        }
    }
}

#[component]
fn StatCard(#[prop(into)] label: String, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon" aria-hidden="true"></div>
            <div class="stat-card__value">{value}</div>
            <div class="stat-card__label">{label}</div>
        </div>
    }
}

#[component]
fn Stats(stats: Option<PersonalStats>) -> impl IntoView {
    let shown = RwSignal::new(StatsAnimation::placeholder());
    let interval = StoredValue::new(None::<IntervalHandle>);

    if let Some(stats) = stats {
        let animation = StoredValue::new(StatsAnimation::new(stats));

        let start = move || {
            let tick = move || {
                let finished = animation
                    .try_update_value(|a| {
                        shown.set(a.tick());
                        a.is_finished()
                    })
                    .unwrap_or(true);
                if finished {
                    if let Some(handle) = interval.get_value() {
                        handle.clear();
                    }
                }
            };
            match set_interval_with_handle(tick, COUNTER_TICK) {
                Ok(handle) => interval.set_value(Some(handle)),
                Err(e) => warn!("Could not start stat counters: {:?}", e),
            }
        };

        if let Err(e) = set_timeout_with_handle(start, STATS_START_DELAY) {
            warn!("Could not schedule stat counters: {:?}", e);
        }
    }

    on_cleanup(move || {
        if let Some(handle) = interval.get_value() {
            handle.clear();
        }
    });

    let text = |f: fn(&PersonalStats) -> String| Signal::derive(move || shown.with(f));

    view! {
        <div class="stats-grid">
            <StatCard label="Years Coding" value=text(|s| s.coding_years.clone()) />
            <StatCard label="Projects Completed" value=text(|s| s.projects_completed.to_string()) />
            <StatCard label="Languages Learned" value=text(|s| s.languages_learned.to_string()) />
            <StatCard label="Certifications" value=text(|s| s.certifications.to_string()) />
            <StatCard
                label="GitHub Commits"
                value=text(|s| format_thousands(u64::from(s.github_commits)))
            />
            <StatCard label="Lines of Code" value=text(|s| s.lines_of_code.clone()) />
        </div>
    }
}

#[component]
fn Timeline(items: Vec<TimelineItem>) -> impl IntoView {
    view! {
        <div class="timeline">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <div class=format!("timeline-item timeline-item--{}", item.kind)>
                            <div class="timeline-item__marker">
                                <div class="timeline-item__icon" aria-hidden="true"></div>
                                <div class="timeline-item__year">{item.year}</div>
                            </div>
                            <div class="timeline-item__content">
                                <h4 class="timeline-item__title">{item.title}</h4>
                                <p class="timeline-item__description">{item.description}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Achievements(items: Vec<Achievement>) -> impl IntoView {
    view! {
        <div class="achievements-grid">
            {items
                .into_iter()
                .map(|achievement| {
                    view! {
                        <div class="achievement-card">
                            <div class="achievement-card__icon" aria-hidden="true"></div>
                            <div class="achievement-card__content">
                                <h4 class="achievement-card__title">{achievement.title}</h4>
                                <p class="achievement-card__description">{achievement.description}</p>
                                <span class="achievement-card__year">{achievement.year}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Testimonials(items: Vec<Testimonial>) -> impl IntoView {
    view! {
        <div class="testimonials-grid">
            {items
                .into_iter()
                .map(|t| {
                    let stars = t.stars();
                    let rating = format!(
                        "{}{}",
                        "★".repeat(usize::from(stars)),
                        "☆".repeat(usize::from(5 - stars))
                    );
                    let role = format!("{} at {}", t.role, t.company);
                    view! {
                        <div class="testimonial-card">
                            <div class="testimonial-card__header">
                                <div class="testimonial-card__avatar" aria-hidden="true"></div>
                                <div class="testimonial-card__info">
                                    <h4 class="testimonial-card__name">{t.name}</h4>
                                    <p class="testimonial-card__role">
                                        {role}
                                    </p>
                                </div>
                                <div
                                    class="testimonial-card__rating"
                                    aria-label=format!("{stars} out of 5")
                                >
                                    {rating}
                                </div>
                            </div>
                            <blockquote class="testimonial-card__content">
                                {format!("\"{}\"", t.content)}
                            </blockquote>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Stats, timeline, achievements and testimonials from the about page
#[component]
pub fn AboutTabs(page: Option<Page>) -> impl IntoView {
    let stats: Option<PersonalStats> = page_section(page.as_ref(), "stats");
    let timeline: Vec<TimelineItem> = page_section(page.as_ref(), "timeline");
    let achievements: Vec<Achievement> = page_section(page.as_ref(), "achievements");
    let testimonials: Vec<Testimonial> = page_section(page.as_ref(), "testimonials");

    let tabs = RwSignal::new(TabGroupState::new(4));
    let labels = vec![
        TabLabel::new("Stats"),
        TabLabel::new("Timeline"),
        TabLabel::new("Achievements"),
        TabLabel::new("Testimonials"),
    ];
    let hidden = move |index: usize| move || !tabs.with(|t| t.is_selected(index));

    view! {
        <div class="about-tab-group">
            <TabList tabs=tabs labels=labels class="about-tab-group" />
            <div class="about-tab-group__body">
                <div role="tabpanel" class="about-tab-group__content" hidden=hidden(0)>
                    <Stats stats=stats />
                </div>
                <div role="tabpanel" class="about-tab-group__content" hidden=hidden(1)>
                    <Timeline items=timeline />
                </div>
                <div role="tabpanel" class="about-tab-group__content" hidden=hidden(2)>
                    <Achievements items=achievements />
                </div>
                <div role="tabpanel" class="about-tab-group__content" hidden=hidden(3)>
                    <Testimonials items=testimonials />
                </div>
            </div>
        </div>
    }
}
