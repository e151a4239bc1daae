use folio_app::TabGroupState;
use folio_core::{group_projects_by_category, Project};
use leptos::prelude::*;

use super::tab_group::{TabLabel, TabList};

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="project-card">
            {project
                .image
                .map(|src| {
                    view! { <img class="project-card__image" src=src alt=project.title.clone() loading="lazy" /> }
                })}
            <div class="project-card__body">
                <h4 class="project-card__title">{project.title}</h4>
                <p class="project-card__description">{project.description}</p>
                <ul class="project-card__tech">
                    {project
                        .technologies
                        .into_iter()
                        .map(|tech| view! { <li class="project-card__tag">{tech}</li> })
                        .collect_view()}
                </ul>
                <div class="project-card__links">
                    {project
                        .live_url
                        .map(|href| {
                            view! {
                                <a class="project-card__link" href=href target="_blank" rel="noreferrer">
                                    "Live"
                                </a>
                            }
                        })}
                    {project
                        .repo_url
                        .map(|href| {
                            view! {
                                <a class="project-card__link" href=href target="_blank" rel="noreferrer">
                                    "Code"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}

fn project_grid(projects: Vec<Project>) -> impl IntoView {
    view! {
        <div class="projects-grid">
            {projects
                .into_iter()
                .map(|project| view! { <ProjectCard project=project /> })
                .collect_view()}
        </div>
    }
}

/// "All" plus one tab per project category
#[component]
pub fn ProjectsTabs(projects: Vec<Project>) -> impl IntoView {
    let categories = group_projects_by_category(&projects);

    let tabs = RwSignal::new(TabGroupState::new(categories.len() + 1));
    let labels = std::iter::once(TabLabel::new("All"))
        .chain(categories.iter().map(|c| {
            let label = if c.category.is_empty() {
                "Other".to_string()
            } else {
                c.category.clone()
            };
            TabLabel::new(label)
        }))
        .collect();

    let panels = std::iter::once(projects)
        .chain(categories.into_iter().map(|c| c.projects))
        .enumerate()
        .map(|(index, projects)| {
            view! {
                <div
                    role="tabpanel"
                    class="projects-tab-group__content"
                    hidden=move || !tabs.with(|t| t.is_selected(index))
                >
                    {project_grid(projects)}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="projects-tab-group">
            <TabList tabs=tabs labels=labels class="projects-tab-group" />
            <div class="projects-tab-group__body">{panels}</div>
        </div>
    }
}
