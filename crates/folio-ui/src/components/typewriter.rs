//! Typewriter Text
//!
//! Reveals its text one character at a time, starting the first time the
//! element is mounted into the page.

use std::time::Duration;

use dioxus::prelude::*;

use crate::hooks::use_typewriter;

/// Properties for the TypewriterText component
#[derive(Clone, PartialEq, Props)]
pub struct TypewriterTextProps {
    /// The full text to reveal
    pub text: String,
    /// Milliseconds per character
    #[props(default = 100)]
    pub interval_ms: u64,
    /// Show a blinking caret until the reveal completes
    #[props(default = true)]
    pub cursor: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Inline typewriter; wrap it in whatever heading the page needs
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     h1 { class: "hero-title",
///         TypewriterText { text: "Welcome to My Portfolio".to_string(), interval_ms: 100 }
///     }
/// }
/// ```
#[component]
pub fn TypewriterText(props: TypewriterTextProps) -> Element {
    let handle = use_typewriter(props.text.clone(), Duration::from_millis(props.interval_ms));
    let revealed = handle.revealed();
    let show_cursor = props.cursor && !handle.is_complete();
    let class = match props.class.as_deref() {
        Some(extra) => format!("typewriter {}", extra),
        None => "typewriter".to_string(),
    };

    rsx! {
        span {
            class: "{class}",
            "aria-label": "{props.text}",
            onmounted: move |_| handle.start(),
            "{revealed}"
            if show_cursor {
                span { class: "typewriter-cursor", "aria-hidden": "true", "|" }
            }
        }
    }
}
