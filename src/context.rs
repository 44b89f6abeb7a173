//! Site-wide context for Folio.
//!
//! The App component provides the theme controller and the site config;
//! pages and the header read them through these hooks.
//!
//! ## Usage
//!
//! ```ignore
//! let mut theme = use_theme();
//! theme.write().toggle();
//!
//! let config = use_site_config();
//! ```

use dioxus::prelude::*;
use folio_core::{SiteConfig, ThemeController};

/// Hook to access the theme controller.
///
/// Writing through the signal re-renders the root element with the new
/// theme class.
pub fn use_theme() -> Signal<ThemeController> {
    use_context::<Signal<ThemeController>>()
}

/// Hook to access the loaded site configuration.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}
