use dioxus::prelude::*;
use folio_core::ThemeController;

use crate::components::{NavHeader, SiteFooter};
use crate::context::use_theme;
use crate::pages::{About, Contact, Home, Projects};
use crate::theme::{theme_variables, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` and `/home` - Hero, cube, skills and featured projects
/// - `/about` - Avatar, bio, skills and achievements
/// - `/projects` - Filterable project catalogue
/// - `/contact` - Contact form and socials
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Index {},
        #[route("/home")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/projects")]
        Projects {},
        #[route("/contact")]
        Contact {},
}

/// `/` renders the home page
#[component]
fn Index() -> Element {
    rsx! { Home {} }
}

/// Root application component.
///
/// Provides global styles, theme and config context, and routing.
#[component]
pub fn App() -> Element {
    let theme: Signal<ThemeController> = use_signal(ThemeController::default);
    use_context_provider(|| theme);
    use_context_provider(crate::site_config);
    let variables = use_hook(theme_variables);

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {variables} }
        Router::<Route> {}
    }
}

/// Shared chrome around every page; carries the theme class.
#[component]
fn SiteLayout() -> Element {
    let theme = use_theme();
    let class = theme.read().current().css_class();

    rsx! {
        div { class: "site {class}",
            NavHeader {}
            main { class: "site-main", Outlet::<Route> {} }
            SiteFooter {}
        }
    }
}
