//! About page - avatar, bio, skills and the achievements timeline.

use dioxus::prelude::*;
use folio_ui::{AnimatedAvatar, ParticleButton, Reveal, TypewriterText};

use crate::components::{AchievementsTimeline, SkillsGrid};
use crate::context::use_site_config;

#[component]
pub fn About() -> Element {
    let config = use_site_config();

    rsx! {
        div { class: "page about",
            Reveal { class: "about-intro",
                div { class: "about-avatar",
                    AnimatedAvatar { name: config.owner.clone(), effect: config.effects.avatar }
                }
                div { class: "about-text",
                    h1 { class: "hero-title", "About Me" }
                    p { class: "about-bio",
                        TypewriterText {
                            text: config.about_bio.text.clone(),
                            interval_ms: config.about_bio.interval_ms,
                        }
                    }
                    p { class: "about-details", "{config.about_details}" }
                }
            }

            SkillsGrid { skills: config.skills.clone() }
            AchievementsTimeline { achievements: config.achievements.clone() }

            Reveal { class: "cta",
                ParticleButton {
                    href: config.resume_href.clone(),
                    download: true,
                    effect: config.effects.button,
                    "Download Resume"
                }
            }
        }
    }
}
