//! Page components for the Tilt Card demo.

mod compare;
mod showcase;

pub use compare::Compare;
pub use showcase::Showcase;
