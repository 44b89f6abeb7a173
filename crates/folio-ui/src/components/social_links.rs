//! Social Links
//!
//! Row of social icons. Every click bursts into one particle field shared
//! by the whole row.

use dioxus::prelude::*;
use folio_core::{ParticleEffect, Point, SocialLink};

use crate::components::ParticleLayer;
use crate::hooks::use_particle_emitter;

/// Properties for the SocialLinks component
#[derive(Clone, PartialEq, Props)]
pub struct SocialLinksProps {
    pub links: Vec<SocialLink>,
    #[props(default = ParticleEffect::SOCIAL)]
    pub effect: ParticleEffect,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn SocialLinks(props: SocialLinksProps) -> Element {
    let emitter = use_particle_emitter(props.effect);
    let field = emitter.field();
    let class = super::button::class_list("social-links particle-anchor", props.class.as_deref());

    rsx! {
        div { class: "{class}",
            for link in props.links.iter() {
                {
                    let emitter = emitter.clone();
                    rsx! {
                        a {
                            key: "{link.name}",
                            class: "social-link",
                            href: "{link.href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "{link.name}",
                            onclick: move |_| emitter.emit(Point::ORIGIN),
                            svg {
                                class: "social-icon",
                                width: "24",
                                height: "24",
                                view_box: "0 0 24 24",
                                fill: "currentColor",
                                path { d: "{link.icon}" }
                            }
                        }
                    }
                }
            }
            ParticleLayer { field }
        }
    }
}
