//! Theme Toggle
//!
//! Icon button that flips between dark and light. Shows the sun while dark
//! (the action it offers) and the moon while light.

use dioxus::prelude::*;
use folio_core::Theme;

use crate::components::{Button, ButtonVariant};

const SUN_PATH: &str = "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z";
const MOON_PATH: &str = "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z";

/// The icon path offered for switching away from `theme`
pub fn toggle_icon(theme: Theme) -> &'static str {
    if theme.is_dark() {
        SUN_PATH
    } else {
        MOON_PATH
    }
}

#[component]
pub fn ThemeToggle(theme: Theme, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Icon,
            class: "theme-toggle".to_string(),
            aria_label: theme.toggle_label().to_string(),
            onclick: move |_| on_toggle.call(()),
            svg {
                class: "theme-icon",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: toggle_icon(theme) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_offers_sun() {
        assert_eq!(toggle_icon(Theme::Dark), SUN_PATH);
        assert_eq!(toggle_icon(Theme::Light), MOON_PATH);
    }
}
