//! Site chrome and page sections for Folio.
//!
//! Reusable widgets live in `folio-ui`; these are the pieces that know
//! about routes and the site config.

mod footer;
mod nav_header;
mod sections;

pub use footer::SiteFooter;
pub use nav_header::NavHeader;
pub use sections::{AchievementsTimeline, ProjectGrid, SkillsGrid};
