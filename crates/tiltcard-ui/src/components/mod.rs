//! Reusable tilt card components

mod sheen;
mod tilt_card;

pub use sheen::*;
pub use tilt_card::*;
