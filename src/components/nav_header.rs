//! Navigation Header Component
//!
//! Desktop: logo, horizontal nav links and the theme toggle
//! Mobile: hamburger that opens a glass panel; choosing a link closes it

use dioxus::prelude::*;
use folio_ui::{AmbientBackdrop, ThemeToggle};

use crate::app::Route;
use crate::context::{use_site_config, use_theme};

/// Navigation destination within the site
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavLocation {
    Home,
    Projects,
    About,
    Contact,
}

impl NavLocation {
    pub const ALL: [NavLocation; 4] = [
        NavLocation::Home,
        NavLocation::Projects,
        NavLocation::About,
        NavLocation::Contact,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Projects => "Projects",
            NavLocation::About => "About",
            NavLocation::Contact => "Contact",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Index {},
            NavLocation::Projects => Route::Projects {},
            NavLocation::About => Route::About {},
            NavLocation::Contact => Route::Contact {},
        }
    }

    /// The location a route belongs to
    pub fn of(route: &Route) -> NavLocation {
        match route {
            Route::Index {} | Route::Home {} => NavLocation::Home,
            Route::Projects {} => NavLocation::Projects,
            Route::About {} => NavLocation::About,
            Route::Contact {} => NavLocation::Contact,
        }
    }
}

const MENU_OPEN_PATH: &str = "M4 6h16M4 12h16m-7 6h7";
const MENU_CLOSE_PATH: &str = "M6 18L18 6M6 6l12 12";

/// Navigation Header component
///
/// - Left: owner name as the logo, linking home
/// - Center: navigation links
/// - Right: theme toggle and, on narrow windows, the menu button
#[component]
pub fn NavHeader() -> Element {
    let config = use_site_config();
    let mut theme = use_theme();
    let current = NavLocation::of(&use_route::<Route>());
    let mut menu_open = use_signal(|| false);

    let link_class = move |location: NavLocation| {
        if location == current {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    rsx! {
        header { class: "nav-header",
            AmbientBackdrop {
                count: config.effects.ambient_count,
                frame_ms: config.effects.frame_ms,
                class: "nav-backdrop".to_string(),
                div { class: "nav-header-inner",
                    Link { to: Route::Index {}, class: "logo",
                        span { class: "logo-text", "{config.owner}" }
                    }

                    nav { class: "nav-links",
                        for location in NavLocation::ALL {
                            Link {
                                key: "{location.display_name()}",
                                to: location.route(),
                                class: link_class(location),
                                onclick: move |_| {
                                    tracing::debug!(to = location.display_name(), "Navigate");
                                },
                                span { class: "nav-link-label", "{location.display_name()}" }
                                span { class: "nav-link-underline" }
                            }
                        }
                    }

                    div { class: "nav-actions",
                        ThemeToggle {
                            theme: theme.read().current(),
                            on_toggle: move |_| {
                                theme.write().toggle();
                            },
                        }
                        button {
                            r#type: "button",
                            class: "menu-toggle",
                            "aria-label": if menu_open() { "Close menu" } else { "Open menu" },
                            "aria-expanded": "{menu_open()}",
                            onclick: move |_| menu_open.set(!menu_open()),
                            svg {
                                width: "28",
                                height: "28",
                                view_box: "0 0 24 24",
                                fill: "none",
                                stroke: "currentColor",
                                stroke_width: "2",
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                path { d: if menu_open() { MENU_CLOSE_PATH } else { MENU_OPEN_PATH } }
                            }
                        }
                    }
                }

                if menu_open() {
                    div { class: "mobile-menu",
                        ul {
                            for location in NavLocation::ALL {
                                li { key: "{location.display_name()}",
                                    Link {
                                        to: location.route(),
                                        class: link_class(location),
                                        onclick: move |_| menu_open.set(false),
                                        "{location.display_name()}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "neon-border" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_and_index_share_a_location() {
        assert_eq!(NavLocation::of(&Route::Index {}), NavLocation::Home);
        assert_eq!(NavLocation::of(&Route::Home {}), NavLocation::Home);
    }

    #[test]
    fn every_location_round_trips_through_its_route() {
        for location in NavLocation::ALL {
            assert_eq!(NavLocation::of(&location.route()), location);
        }
    }
}
