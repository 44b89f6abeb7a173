//! Button Components
//!
//! - Primary: glowing pill used for calls to action
//! - Ghost: quiet secondary action
//! - Icon: compact square button for toggles
//!
//! [`ParticleButton`] wraps any of them with a click burst.

use dioxus::prelude::*;
use folio_core::{ParticleEffect, Point};

use crate::components::ParticleLayer;
use crate::hooks::use_particle_emitter;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Call-to-action pill with green glow
    #[default]
    Primary,
    /// Subtle/secondary action
    Ghost,
    /// Square icon button (theme toggle, menu)
    Icon,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Icon => "btn-icon",
        }
    }
}

/// Join a base class with optional extras
pub(crate) fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Accessible label when the content is an icon
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Ghost,
///         onclick: move |_| menu_open.toggle(),
///         "Menu"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = class_list(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            "aria-label": props.aria_label.as_deref().unwrap_or(""),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Properties for the ParticleButton component
#[derive(Clone, PartialEq, Props)]
pub struct ParticleButtonProps {
    /// Button content
    pub children: Element,
    /// Render as a link to this target instead of a button
    #[props(default)]
    pub href: Option<String>,
    /// Offer the link target as a download
    #[props(default = false)]
    pub download: bool,
    /// Click handler, called after the burst
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// A disabled button neither bursts nor calls `onclick`
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute when rendered as a button
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Burst shape
    #[props(default = ParticleEffect::BUTTON)]
    pub effect: ParticleEffect,
}

/// Call-to-action that throws off particles when clicked
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ParticleButton { href: "/contact".to_string(), "Get in Touch" }
///
///     ParticleButton {
///         disabled: form.read().is_submitted(),
///         onclick: move |_| submit(),
///         "Send Message"
///     }
/// }
/// ```
#[component]
pub fn ParticleButton(props: ParticleButtonProps) -> Element {
    let emitter = use_particle_emitter(props.effect);
    let field = emitter.field();
    let disabled = props.disabled;
    let onclick = props.onclick;

    let on_press = move |_: MouseEvent| {
        if disabled {
            return;
        }
        emitter.emit(Point::ORIGIN);
        if let Some(handler) = &onclick {
            handler.call(());
        }
    };

    let class = if disabled { "btn-primary disabled" } else { "btn-primary" };

    rsx! {
        div { class: "particle-anchor",
            if let Some(href) = props.href.clone() {
                a {
                    class: "{class}",
                    href: "{href}",
                    download: props.download,
                    onclick: on_press,
                    {props.children}
                }
            } else {
                button {
                    class: "{class}",
                    r#type: "{props.button_type}",
                    disabled: disabled,
                    onclick: on_press,
                    {props.children}
                }
            }
            ParticleLayer { field }
        }
    }
}
