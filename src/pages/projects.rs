//! Projects page - category pills over a filtered grid.

use dioxus::prelude::*;
use folio_core::{category_counts, filter_projects, ALL_CATEGORIES};
use folio_ui::{CategoryPills, ParticleButton, Reveal};

use crate::app::Route;
use crate::components::ProjectGrid;
use crate::context::use_site_config;

#[component]
pub fn Projects() -> Element {
    let config = use_site_config();
    let navigator = use_navigator();
    let mut filter = use_signal(|| ALL_CATEGORIES.to_string());

    let pills = category_counts(&config.projects);
    let shown: Vec<_> = filter_projects(&config.projects, &filter())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div { class: "page projects",
            section { class: "hero",
                h1 { class: "hero-title", "My Projects" }
                p { class: "hero-tagline", "{config.projects_intro}" }
            }

            CategoryPills {
                categories: pills,
                selected: filter(),
                on_select: move |category: String| {
                    tracing::debug!(%category, "Project filter");
                    filter.set(category);
                },
            }

            ProjectGrid { projects: shown }

            Reveal { class: "cta",
                ParticleButton {
                    effect: config.effects.button,
                    onclick: move |_| {
                        navigator.push(Route::Contact {});
                    },
                    "Get in Touch"
                }
            }
        }
    }
}
