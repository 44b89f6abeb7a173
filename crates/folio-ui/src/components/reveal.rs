//! Reveal
//!
//! Fades and lifts its children into place the first time they are
//! mounted. Later remounts of the same instance stay visible.

use dioxus::prelude::*;
use folio_core::VisibilityTrigger;

/// Properties for the Reveal component
#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    /// Additional CSS classes
    #[props(default)]
    pub class: String,
    pub children: Element,
}

/// Entrance wrapper for page sections
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Reveal { class: "skills",
///         h2 { class: "section-title", "Skills" }
///     }
/// }
/// ```
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let mut trigger = use_signal(VisibilityTrigger::new);
    let class = reveal_class(trigger.read().has_fired(), &props.class);

    rsx! {
        section {
            class: "{class}",
            onmounted: move |_| {
                if trigger.write().fire() {
                    tracing::trace!("Section revealed");
                }
            },
            {props.children}
        }
    }
}

fn reveal_class(visible: bool, extra: &str) -> String {
    let mut class = String::from("reveal");
    if visible {
        class.push_str(" visible");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_fired() {
        let mut trigger = VisibilityTrigger::new();
        assert_eq!(reveal_class(trigger.has_fired(), ""), "reveal");

        assert!(trigger.fire());
        assert_eq!(reveal_class(trigger.has_fired(), ""), "reveal visible");

        // A remount fires again but the section stays shown
        assert!(!trigger.fire());
        assert_eq!(reveal_class(trigger.has_fired(), "skills"), "reveal visible skills");
    }
}
