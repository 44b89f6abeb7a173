//! Reusable UI components
//!
//! All components read the theme from the root element's `dark` / `light`
//! class, so none of them take a theme prop except the toggle itself.

mod ambient;
mod avatar;
mod button;
mod category_pills;
mod input;
mod particle_layer;
mod reveal;
mod social_links;
mod theme_toggle;
mod typewriter;
mod wire_cube;

pub use ambient::*;
pub use avatar::*;
pub use button::*;
pub use category_pills::*;
pub use input::*;
pub use particle_layer::*;
pub use reveal::*;
pub use social_links::*;
pub use theme_toggle::*;
pub use typewriter::*;
pub use wire_cube::*;
