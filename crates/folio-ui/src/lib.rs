//! Folio UI Components
//!
//! Dioxus components for the portfolio site: particle-burst buttons, the
//! rotating wireframe cube, typewriter headings, the theme toggle, and form
//! inputs with inline errors.
//!
//! ## Design Philosophy
//!
//! Neon on void, with a daylight variant:
//! - **Green (#22c55e)**: Accents, particles, focus glow
//! - **Black / White**: Page background for dark / light theme
//! - **Glass panels**: translucent cards with a blurred backdrop
//!
//! Every timer a component starts is tied to that component's lifetime
//! through [`hooks::use_task_scope`].

pub mod components;
pub mod hooks;

pub use components::*;
pub use hooks::*;
