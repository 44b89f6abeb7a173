//! Site footer: branding, copyright and socials over the drifting field

use dioxus::prelude::*;
use folio_ui::{AmbientBackdrop, SocialLinks};

use crate::app::Route;
use crate::context::use_site_config;

/// The copyright line under the footer logo
pub fn copyright_line(year: u16, owner: &str) -> String {
    format!("© {} {}. All rights reserved.", year, owner)
}

#[component]
pub fn SiteFooter() -> Element {
    let config = use_site_config();
    let copyright = copyright_line(config.copyright_year, &config.owner);

    rsx! {
        footer { class: "site-footer",
            AmbientBackdrop {
                count: config.effects.ambient_count,
                frame_ms: config.effects.frame_ms,
                class: "footer-backdrop".to_string(),
                div { class: "footer-inner",
                    div { class: "footer-branding",
                        Link { to: Route::Home {}, class: "logo",
                            span { class: "logo-text", "{config.owner}" }
                        }
                        p { class: "copyright", "{copyright}" }
                    }
                    SocialLinks { links: config.socials.clone(), effect: config.effects.social }
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
    fn copyright_names_owner_and_year() {
        assert_eq!(
            copyright_line(2025, "SK-TECHNOLOGY-801"),
            "© 2025 SK-TECHNOLOGY-801. All rights reserved."
        );
    }
}
