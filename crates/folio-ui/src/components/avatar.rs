//! Animated Avatar
//!
//! Slowly spinning portrait that sheds fading particles on hover.

use dioxus::prelude::*;
use folio_core::{ParticleEffect, Point};

use crate::components::ParticleLayer;
use crate::hooks::use_particle_emitter;

/// Properties for the AnimatedAvatar component
#[derive(Clone, PartialEq, Props)]
pub struct AnimatedAvatarProps {
    /// Image URL; initials are shown when absent
    #[props(default)]
    pub src: Option<String>,
    /// Fallback text and alt text
    pub name: String,
    #[props(default = ParticleEffect::AVATAR)]
    pub effect: ParticleEffect,
}

/// Up to two initials from a display name
pub fn initials(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '-')
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_alphanumeric())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn AnimatedAvatar(props: AnimatedAvatarProps) -> Element {
    let emitter = use_particle_emitter(props.effect);
    let field = emitter.field();
    let fallback = initials(&props.name);

    rsx! {
        div {
            class: "avatar particle-anchor",
            onmouseenter: move |_| emitter.emit(Point::ORIGIN),
            if let Some(src) = &props.src {
                img { class: "avatar-image", src: "{src}", alt: "{props.name}" }
            } else {
                div { class: "avatar-image avatar-initials", role: "img", "aria-label": "{props.name}",
                    "{fallback}"
                }
            }
            ParticleLayer { field }
        }
    }
}
