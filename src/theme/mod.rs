//! Visual theme for the demo app.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
