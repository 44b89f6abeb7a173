//! Home page - typewriter hero, the vanishing cube, skills and a few
//! featured projects.

use dioxus::prelude::*;
use folio_ui::{ParticleButton, Reveal, TypewriterText, WireCubeView};

use crate::app::Route;
use crate::components::{ProjectGrid, SkillsGrid};
use crate::context::use_site_config;

/// Projects shown on the home page
const FEATURED: usize = 3;

#[component]
pub fn Home() -> Element {
    let config = use_site_config();
    let navigator = use_navigator();
    let featured: Vec<_> = config.projects.iter().take(FEATURED).cloned().collect();

    rsx! {
        div { class: "page home",
            section { class: "hero",
                h1 { class: "hero-title",
                    TypewriterText {
                        text: config.home_hero.text.clone(),
                        interval_ms: config.home_hero.interval_ms,
                    }
                }
                p { class: "hero-tagline", "{config.home_tagline}" }
            }

            Reveal { class: "cube-stage",
                WireCubeView {
                    frame_ms: config.effects.frame_ms,
                    effect: config.effects.cube,
                }
            }

            SkillsGrid { skills: config.skills.clone() }
            ProjectGrid { projects: featured }

            Reveal { class: "cta",
                ParticleButton {
                    effect: config.effects.button,
                    onclick: move |_| {
                        navigator.push(Route::Projects {});
                    },
                    "Explore All Projects"
                }
            }
        }
    }
}
