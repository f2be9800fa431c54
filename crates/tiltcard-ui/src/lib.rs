//! Tilt Card UI Components
//!
//! Dioxus components rendering a [`tiltcard_core::TiltController`]: a card
//! that tilts toward the finger, springs back flat on release, and slides a
//! light sheen across its face.
//!
//! ## Layers
//!
//! - **Container**: size, drop shadow and the card rotation
//! - **Inner**: background, border and rounded clipping
//! - **Content**: children, shifted against the tilt for parallax
//! - **Sheen**: gradient reflection following the horizontal tilt
//!
//! Include [`TILT_CARD_STYLES`] once in the document (e.g. next to the
//! application's global styles) before rendering any [`TiltCard`].

pub mod components;
mod styles;

pub use components::*;
pub use styles::TILT_CARD_STYLES;
