//! Motion shaping: target tilt in, shaped tilt out.
//!
//! Two models:
//!
//! - [`MotionModel::ReleaseOnly`] follows the finger exactly while dragging
//!   and only springs back to flat after release.
//! - [`MotionModel::Continuous`] chases the target with a spring at all
//!   times, so the card lags the finger and carries weight during the drag.
//!
//! Either way a new target never restarts the spring cold: position and
//! velocity carry over.

use serde::{Deserialize, Serialize};

use crate::spring::{SpringConfig, SpringState};
use crate::types::Tilt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionModel {
    /// Rigid follow while dragging, spring on release
    ReleaseOnly,
    /// Spring toward the target on every change
    #[default]
    Continuous,
}

impl MotionModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionModel::ReleaseOnly => "release-only",
            MotionModel::Continuous => "continuous",
        }
    }
}

impl std::fmt::Display for MotionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target and shaped tilt of one card
#[derive(Clone, Debug)]
pub struct TiltMotion {
    model: MotionModel,
    spring: SpringConfig,
    target: Tilt,
    x: SpringState,
    y: SpringState,
}

impl TiltMotion {
    pub fn new(model: MotionModel, spring: SpringConfig) -> Self {
        Self {
            model,
            spring,
            target: Tilt::ZERO,
            x: SpringState::default(),
            y: SpringState::default(),
        }
    }

    pub fn model(&self) -> MotionModel {
        self.model
    }

    /// Where the finger wants the card to be
    pub fn target(&self) -> Tilt {
        self.target
    }

    /// What the card actually renders
    pub fn shaped(&self) -> Tilt {
        Tilt::new(self.x.position, self.y.position)
    }

    pub fn velocity(&self) -> Tilt {
        Tilt::new(self.x.velocity, self.y.velocity)
    }

    /// Move the target during a drag.
    ///
    /// A new press reports a zero translation, so under
    /// [`MotionModel::ReleaseOnly`] grabbing a card that is still springing
    /// back lays it flat at once. [`MotionModel::Continuous`] keeps the
    /// in-flight position and velocity.
    pub fn drag_to(&mut self, target: Tilt) {
        self.target = target;
        match self.model {
            MotionModel::ReleaseOnly => {
                self.x.snap_to(target.x);
                self.y.snap_to(target.y);
            }
            MotionModel::Continuous => {
                self.x.retarget(target.x);
                self.y.retarget(target.y);
            }
        }
    }

    /// End of drag: the target is zero from now on, the shaped tilt follows
    /// under spring dynamics.
    pub fn release(&mut self) {
        self.target = Tilt::ZERO;
        self.x.retarget(0.0);
        self.y.retarget(0.0);
    }

    /// Advance both axes by `dt` seconds. Returns whether another frame is
    /// needed.
    pub fn tick(&mut self, dt: f32) -> bool {
        let x_moving = self.x.step(&self.spring, dt);
        let y_moving = self.y.step(&self.spring, dt);
        x_moving || y_moving
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled(&self.spring) && self.y.is_settled(&self.spring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn release_only_follows_rigidly() {
        let mut motion = TiltMotion::new(MotionModel::ReleaseOnly, SpringConfig::default());
        motion.drag_to(Tilt::new(-5.0, 9.0));
        assert_eq!(motion.shaped(), Tilt::new(-5.0, 9.0));
        assert!(motion.is_settled());
        assert!(!motion.tick(FRAME));
    }

    #[test]
    fn continuous_lags_behind() {
        let mut motion = TiltMotion::new(MotionModel::Continuous, SpringConfig::default());
        motion.drag_to(Tilt::new(0.0, 9.0));
        assert_eq!(motion.shaped(), Tilt::ZERO);
        assert!(motion.tick(FRAME));
        let y = motion.shaped().y;
        assert!(y > 0.0 && y < 9.0, "y = {}", y);
    }

    #[test]
    fn release_zeroes_target_but_not_shape() {
        for model in [MotionModel::ReleaseOnly, MotionModel::Continuous] {
            let mut motion = TiltMotion::new(model, SpringConfig::default());
            motion.drag_to(Tilt::new(6.0, 6.0));
            for _ in 0..30 {
                motion.tick(FRAME);
            }
            motion.release();
            assert_eq!(motion.target(), Tilt::ZERO);
            assert!(!motion.shaped().is_zero(), "{} snapped on release", model);
            assert!(motion.tick(FRAME));
        }
    }

    #[test]
    fn model_names() {
        assert_eq!(MotionModel::ReleaseOnly.to_string(), "release-only");
        assert_eq!(MotionModel::default(), MotionModel::Continuous);
    }
}
