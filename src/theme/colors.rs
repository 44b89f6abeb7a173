//! Color palette
//!
//! Neon green on void for the dark theme, deep green on paper for light.
//! [`theme_variables`] turns these into the CSS custom properties the
//! stylesheet reads.

use folio_core::Theme;

// === ACCENT ===
pub const GREEN: &str = "#22c55e";
pub const GREEN_DEEP: &str = "#16a34a";
pub const GREEN_GLOW: &str = "rgba(34, 197, 94, 0.6)";
pub const GREEN_GLOW_SOFT: &str = "rgba(34, 197, 94, 0.3)";

// === DARK ===
pub const VOID_BLACK: &str = "#000000";
pub const GLASS_DARK: &str = "rgba(17, 24, 39, 0.5)";
pub const TEXT_LIGHT: &str = "#f5f5f5";
pub const TEXT_LIGHT_MUTED: &str = "#d1d5db";

// === LIGHT ===
pub const PAPER_WHITE: &str = "#ffffff";
pub const GLASS_LIGHT: &str = "rgba(243, 244, 246, 0.6)";
pub const TEXT_DARK: &str = "#111111";
pub const TEXT_DARK_MUTED: &str = "#4b5563";

// === SEMANTIC ===
pub const DANGER: &str = "#f87171";

struct Palette {
    background: &'static str,
    glass: &'static str,
    text: &'static str,
    text_muted: &'static str,
    accent: &'static str,
    glow: &'static str,
    particle: &'static str,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            background: VOID_BLACK,
            glass: GLASS_DARK,
            text: TEXT_LIGHT,
            text_muted: TEXT_LIGHT_MUTED,
            accent: GREEN,
            glow: GREEN_GLOW,
            particle: GREEN,
        },
        Theme::Light => Palette {
            background: PAPER_WHITE,
            glass: GLASS_LIGHT,
            text: TEXT_DARK,
            text_muted: TEXT_DARK_MUTED,
            accent: GREEN_DEEP,
            glow: GREEN_GLOW_SOFT,
            particle: GREEN_DEEP,
        },
    }
}

/// Custom properties for both theme classes
pub fn theme_variables() -> String {
    [Theme::Dark, Theme::Light]
        .into_iter()
        .map(|theme| {
            let p = palette(theme);
            format!(
                ".site.{} {{ --bg: {}; --glass: {}; --text: {}; --text-muted: {}; \
                 --accent: {}; --glow: {}; --particle: {}; --danger: {}; }}\n",
                theme.css_class(),
                p.background,
                p.glass,
                p.text,
                p.text_muted,
                p.accent,
                p.glow,
                p.particle,
                DANGER,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_themes_get_variables() {
        let css = theme_variables();
        assert!(css.contains(".site.dark { --bg: #000000;"));
        assert!(css.contains(".site.light { --bg: #ffffff;"));
        assert_eq!(css.matches("--accent").count(), 2);
    }
}
