//! Core value types shared by the gesture, motion and style layers.

use std::ops::Neg;

use serde::{Deserialize, Serialize};

/// A pair of tilt angles in degrees.
///
/// `x` rotates about the horizontal axis (driven by vertical drag), `y`
/// rotates about the vertical axis (driven by horizontal drag).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tilt {
    pub x: f32,
    pub y: f32,
}

impl Tilt {
    pub const ZERO: Tilt = Tilt { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Neg for Tilt {
    type Output = Tilt;

    fn neg(self) -> Tilt {
        Tilt::new(-self.x, -self.y)
    }
}

/// Cumulative pointer movement since a drag started, in display units
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation {
    pub dx: f32,
    pub dy: f32,
}

impl Translation {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}
