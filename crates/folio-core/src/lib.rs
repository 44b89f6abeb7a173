//! Folio Core Library
//!
//! Headless state behind the portfolio site's interactive pieces.
//!
//! ## Overview
//!
//! Every page of the site is mostly static markup. The parts that move or
//! react to the visitor live here, free of any UI framework:
//!
//! - **Particles**: short-lived bursts spawned by clicks and hovers, removed
//!   either after a fixed lifetime or by a periodic opacity decay
//! - **Typewriter**: character-by-character reveal of a fixed string
//! - **Theme**: the dark/light toggle read by every page
//! - **Contact**: form data, field validation and the submission cycle
//! - **Projects**: the project catalogue and its category filter
//!
//! Timers are expressed as plain futures (see [`scheduler`]) that observe a
//! [`tokio_util::sync::CancellationToken`], so the owning component decides
//! where they run and cancels them when it goes away.
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{ParticleField, ParticleEffect, Point};
//!
//! let mut field = ParticleField::new(ParticleEffect::BUTTON.decay);
//! let ids = field.burst(Point::ORIGIN, &ParticleEffect::BUTTON);
//! assert_eq!(field.len(), ids.len());
//! ```

pub mod ambient;
pub mod config;
pub mod contact;
pub mod cube;
pub mod error;
pub mod particles;
pub mod projects;
pub mod scheduler;
pub mod theme;
pub mod types;
pub mod typewriter;

// Re-exports
pub use ambient::AmbientField;
pub use config::SiteConfig;
pub use contact::{
    validate, ContactForm, FormData, FormErrors, FormField, FormStatus, LogSink, SubmissionSink,
    SubmitOutcome,
};
pub use cube::WireCube;
pub use error::{SiteError, SiteResult};
pub use particles::{DecayPolicy, Particle, ParticleEffect, ParticleField, ParticleId, Spread};
pub use projects::{categories, category_counts, filter_projects, ALL_CATEGORIES};
pub use scheduler::{Flow, TaskScope};
pub use theme::{Theme, ThemeController};
pub use types::*;
pub use typewriter::{Typewriter, VisibilityTrigger};
