//! Dark/light theme state
//!
//! One value for the whole session, created at the app root and handed to
//! pages through context. Not persisted; every launch starts dark.

use serde::{Deserialize, Serialize};

/// Visual theme variant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class applied to the root element
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Label for the toggle button (names the theme it switches to)
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light theme",
            Theme::Light => "Switch to dark theme",
        }
    }
}

/// Owner of the session theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeController {
    current: Theme,
}

impl ThemeController {
    pub fn new(initial: Theme) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip between dark and light, returning the new theme
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        tracing::debug!(theme = self.current.css_class(), "Theme toggled");
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(ThemeController::default().current(), Theme::Dark);
    }

    #[test]
    fn toggle_twice_restores() {
        let mut ctl = ThemeController::default();
        assert_eq!(ctl.toggle(), Theme::Light);
        assert_eq!(ctl.toggle(), Theme::Dark);
    }

    #[test]
    fn css_classes() {
        assert_eq!(Theme::Dark.css_class(), "dark");
        assert_eq!(Theme::Light.css_class(), "light");
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }

    #[test]
    fn deserializes_lowercase() {
        let t: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(t, Theme::Light);
    }
}
