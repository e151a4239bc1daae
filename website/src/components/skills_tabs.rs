use folio_app::animation::SKILL_BAR_REVEAL_DELAY;
use folio_app::TabGroupState;
use folio_core::prelude::*;
use folio_core::{SkillEntry, SkillGroup};
use leptos::prelude::*;

use super::tab_group::{TabLabel, TabList};

#[component]
fn SkillBar(skill: SkillEntry) -> impl IntoView {
    let revealed = RwSignal::new(false);
    if let Err(e) = set_timeout_with_handle(move || revealed.set(true), SKILL_BAR_REVEAL_DELAY) {
        warn!("Could not schedule skill bar reveal: {:?}", e);
    }

    let level = skill.proficiency;
    let width = move || {
        if revealed.get() {
            format!("{level}%")
        } else {
            "0%".to_string()
        }
    };

    view! {
        <div class="skill-item">
            <div class="skill-item__header">
                <div class="skill-item__info">
                    <h4 class="skill-item__name">
                        {skill.icon.map(|icon| view! { <span class="skill-item__icon">{icon}</span> })}
                        {skill.name}
                    </h4>
                    <div class="skill-item__stats">
                        <span class="skill-item__years">{format!("{} years", skill.years)}</span>
                        <span class="skill-item__projects">
                            {format!("{} projects", skill.projects)}
                        </span>
                    </div>
                </div>
                <div class="skill-item__level">{format!("{level}%")}</div>
            </div>
            <div class="skill-item__bar">
                <div
                    class="skill-item__progress"
                    class=("skill-item__progress--animated", move || revealed.get())
                    style:width=width
                ></div>
            </div>
        </div>
    }
}

/// One tab per skill category, in the order the data layer returns them
#[component]
pub fn SkillsTabs(groups: Vec<SkillGroup>) -> impl IntoView {
    if groups.is_empty() {
        return view! { <p class="skills-tab-group__empty">"No skills to show yet."</p> }
            .into_any();
    }

    let tabs = RwSignal::new(TabGroupState::new(groups.len()));
    let labels = groups
        .iter()
        .map(|g| TabLabel::with_icon(g.icon(), g.label()))
        .collect();

    let panels = groups
        .into_iter()
        .enumerate()
        .map(|(index, group)| {
            view! {
                <div
                    role="tabpanel"
                    class="skills-tab-group__content"
                    hidden=move || !tabs.with(|t| t.is_selected(index))
                >
                    <div class="skills-grid">
                        {group
                            .skills
                            .into_iter()
                            .map(|skill| view! { <SkillBar skill=skill /> })
                            .collect_view()}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="skills-tab-group">
            <TabList tabs=tabs labels=labels class="skills-tab-group" />
            <div class="skills-tab-group__body">{panels}</div>
        </div>
    }
    .into_any()
}
