//! Styling for Folio: palette constants and the global stylesheet.

mod colors;
mod styles;

pub use colors::theme_variables;
pub use styles::GLOBAL_STYLES;
