//! Tilt Card Core Library
//!
//! Gesture capture, spring motion and style mapping for a card that tilts in
//! 3D under a drag, springs back when released, and slides a light sheen
//! across its surface.
//!
//! ## Pipeline
//!
//! ```text
//! PanEvent ──► PanGesture ──► target tilt ──► TiltMotion ──► shaped tilt ──► TiltStyle
//!              (translation)                  (springs)                      (pure map)
//! ```
//!
//! Nothing here depends on a UI toolkit. The host feeds pointer events and
//! frame ticks to a [`TiltController`] and renders the [`TiltStyle`] it
//! returns.
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//! use tiltcard_core::{CardConfig, PanEvent, TiltController};
//!
//! let mut card = TiltController::new(CardConfig::default());
//! card.handle(PanEvent::Begin { pointer_id: 1, x: 0.0, y: 0.0 });
//! card.handle(PanEvent::Update { pointer_id: 1, x: 100.0, y: 0.0 });
//! card.handle(PanEvent::End { pointer_id: 1 });
//!
//! while card.tick(Duration::from_millis(16)) {
//!     let style = card.style();
//!     assert!(style.card.rotate_y.abs() <= 12.0);
//! }
//! ```

pub mod card;
pub mod config;
pub mod error;
pub mod gesture;
pub mod interpolate;
pub mod logging;
pub mod motion;
pub mod spring;
pub mod style;
pub mod types;

// Re-exports
pub use card::{TiltController, FRAME_INTERVAL};
pub use config::{CardConfig, SheenConfig};
pub use error::{TiltError, TiltResult};
pub use gesture::{target_for_translation, GestureOutcome, PanEvent, PanGesture, PointerId};
pub use interpolate::{clamped, interpolate, Extrapolation};
pub use logging::init_logging;
pub use motion::{MotionModel, TiltMotion};
pub use spring::{SpringConfig, SpringState};
pub use style::{CardTransform, ContentTransform, SheenStyle, TiltStyle};
pub use types::*;
