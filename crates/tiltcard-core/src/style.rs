//! Style derivation.
//!
//! [`TiltStyle::derive`] is a pure function of the shaped tilt and the card
//! configuration. The render layer calls it every animation frame and keeps
//! nothing derived between calls.

use serde::Serialize;

use crate::config::CardConfig;
use crate::interpolate::clamped;
use crate::types::Tilt;

/// Rotation of the card surface
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CardTransform {
    pub perspective: f32,
    /// Degrees, within `[-max_angle, max_angle]`
    pub rotate_x: f32,
    /// Degrees, within `[-max_angle, max_angle]`
    pub rotate_y: f32,
}

impl CardTransform {
    pub fn to_css(&self) -> String {
        format!(
            "transform: perspective({:.0}px) rotateX({:.3}deg) rotateY({:.3}deg);",
            self.perspective, self.rotate_x, self.rotate_y
        )
    }
}

/// Parallax shift of the inner content
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ContentTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    /// Counter-rotation keeping the content visually level
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl ContentTransform {
    pub fn to_css(&self) -> String {
        format!(
            "transform: translateX({:.3}px) translateY({:.3}px) rotateX({:.3}deg) rotateY({:.3}deg);",
            self.translate_x, self.translate_y, self.rotate_x, self.rotate_y
        )
    }
}

/// Light reflection position and strength
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SheenStyle {
    pub translate_x: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl SheenStyle {
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateX({:.3}px) scale({});",
            self.opacity, self.translate_x, self.scale
        )
    }
}

/// All presentation values for one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TiltStyle {
    pub card: CardTransform,
    pub content: ContentTransform,
    pub sheen: SheenStyle,
}

impl TiltStyle {
    /// Map a shaped tilt to every rendered value.
    ///
    /// All maps clamp, so a spring swinging past `max_angle` still renders
    /// inside the configured ranges.
    pub fn derive(shaped: Tilt, config: &CardConfig) -> Self {
        if config.is_static() {
            return Self::neutral(config);
        }

        let max = config.max_angle;
        let domain = [-max, max];
        let parallax = [config.parallax_offset, -config.parallax_offset];
        let counter = max * config.sheen.counter_rotation_ratio;
        let counter_range = [counter, -counter];

        let card = CardTransform {
            perspective: config.perspective,
            rotate_x: clamped(shaped.x, domain, domain),
            rotate_y: clamped(shaped.y, domain, domain),
        };

        // Horizontal shift follows the vertical axis' rotation and vice versa.
        let content = ContentTransform {
            translate_x: clamped(shaped.y, domain, parallax),
            translate_y: clamped(shaped.x, domain, parallax),
            rotate_x: clamped(shaped.x, domain, counter_range),
            rotate_y: clamped(shaped.y, domain, counter_range),
        };

        let sheen = SheenStyle {
            translate_x: clamped(shaped.y, domain, [config.sheen.sweep, -config.sheen.sweep]),
            opacity: clamped(
                shaped.y.abs(),
                [0.0, max],
                [config.sheen.min_opacity, config.sheen.max_opacity],
            ),
            scale: config.sheen.scale,
        };

        Self {
            card,
            content,
            sheen,
        }
    }

    /// Flat card: no rotation, no parallax, sheen centered and dimmest.
    pub fn neutral(config: &CardConfig) -> Self {
        Self {
            card: CardTransform {
                perspective: config.perspective,
                rotate_x: 0.0,
                rotate_y: 0.0,
            },
            content: ContentTransform {
                translate_x: 0.0,
                translate_y: 0.0,
                rotate_x: 0.0,
                rotate_y: 0.0,
            },
            sheen: SheenStyle {
                translate_x: 0.0,
                opacity: config.sheen.min_opacity,
                scale: config.sheen.scale,
            },
        }
    }
}
