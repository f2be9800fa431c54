//! UI Components for the Tilt Card demo.

mod card_face;
mod nav_header;

pub use card_face::CardFace;
pub use nav_header::{NavHeader, NavLocation};
