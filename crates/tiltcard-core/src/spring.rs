//! Damped spring simulation.
//!
//! One [`SpringState`] per axis, advanced with semi-implicit Euler:
//!
//! ```text
//! a = (k * (target - p) - c * v) / m
//! v += a * dt
//! p += v * dt
//! ```
//!
//! A spring is a recurrence driven by the frame loop. Once settled it snaps
//! to its target and stops asking for frames until the target changes.

use serde::{Deserialize, Serialize};

use crate::error::{TiltError, TiltResult};

/// Longest frame delta fed into the integrator. Longer gaps (window hidden,
/// debugger pause) are treated as a single 64 ms frame.
pub const MAX_FRAME_DELTA: f32 = 0.064;

/// Integration sub-step. Keeps stiff springs stable when frames run long.
pub const MAX_SUBSTEP: f32 = 1.0 / 120.0;

/// Physical parameters of a spring.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Heavier cards lag further behind the finger
    pub mass: f32,
    /// Spring constant pulling toward the target
    pub stiffness: f32,
    /// Friction opposing velocity
    pub damping: f32,
    /// Snap to the target instead of swinging past it
    pub overshoot_clamping: bool,
    /// Distance from target under which the spring may rest
    pub rest_displacement_threshold: f32,
    /// Speed under which the spring may rest
    pub rest_speed_threshold: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 120.0,
            damping: 15.0,
            overshoot_clamping: false,
            rest_displacement_threshold: 0.01,
            rest_speed_threshold: 0.01,
        }
    }
}

impl SpringConfig {
    /// Spring with damping chosen so the return never overshoots.
    pub fn critically_damped(mass: f32, stiffness: f32) -> Self {
        Self {
            mass,
            stiffness,
            damping: 2.0 * (stiffness * mass).sqrt(),
            ..Self::default()
        }
    }

    /// `c / (2 * sqrt(k * m))`. Below 1 the spring rings, at or above 1 it
    /// creeps back without overshoot.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping_ratio() < 1.0
    }

    /// Whether semi-implicit Euler at [`MAX_SUBSTEP`] decays for this spring.
    ///
    /// With `h` the sub-step, `w² = k / m` and `g = c / m` the update is stable
    /// while `h²·w² + 2·h·g < 4`.
    pub fn is_stable(&self) -> bool {
        let h = MAX_SUBSTEP;
        let stiff = h * h * (self.stiffness / self.mass);
        let damp = 2.0 * h * (self.damping / self.mass);
        (stiff + damp).is_finite() && stiff + damp < 4.0
    }

    pub fn validate(&self) -> TiltResult<()> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.mass) {
            return Err(TiltError::InvalidSpring(format!(
                "mass must be > 0, got {}",
                self.mass
            )));
        }
        if !positive(self.stiffness) {
            return Err(TiltError::InvalidSpring(format!(
                "stiffness must be > 0, got {}",
                self.stiffness
            )));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(TiltError::InvalidSpring(format!(
                "damping must be >= 0, got {}",
                self.damping
            )));
        }
        if !positive(self.rest_displacement_threshold) || !positive(self.rest_speed_threshold) {
            return Err(TiltError::InvalidSpring(
                "rest thresholds must be > 0".to_string(),
            ));
        }
        if !self.is_stable() {
            return Err(TiltError::InvalidSpring(format!(
                "stiffness {} and damping {} are too large for mass {}",
                self.stiffness, self.damping, self.mass
            )));
        }
        Ok(())
    }
}

/// Position, velocity and target of one animated axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringState {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
}

impl SpringState {
    /// A spring at rest at `value`.
    pub fn at_rest(value: f32) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Point the spring at a new target. Position and velocity carry over so
    /// an in-flight animation bends toward the new target without a jump.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
    }

    /// Put the spring at rest at `value`.
    pub fn snap_to(&mut self, value: f32) {
        *self = Self::at_rest(value);
    }

    pub fn is_settled(&self, config: &SpringConfig) -> bool {
        (self.target - self.position).abs() < config.rest_displacement_threshold
            && self.velocity.abs() < config.rest_speed_threshold
    }

    /// Advance by `dt` seconds. Returns `true` while the spring still needs
    /// frames, `false` once it has come to rest on its target.
    pub fn step(&mut self, config: &SpringConfig, dt: f32) -> bool {
        if self.is_settled(config) {
            self.snap_to(self.target);
            return false;
        }

        let mut remaining = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DELTA)
        } else {
            0.0
        };

        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            remaining -= h;

            let before = self.target - self.position;
            let accel =
                (config.stiffness * before - config.damping * self.velocity) / config.mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;

            if !self.position.is_finite() || !self.velocity.is_finite() {
                tracing::warn!(rest_target = self.target, "spring diverged, snapping to rest");
                let rest = if self.target.is_finite() { self.target } else { 0.0 };
                self.snap_to(rest);
                return false;
            }

            if config.overshoot_clamping {
                let after = self.target - self.position;
                if before != 0.0 && before.signum() != after.signum() {
                    self.snap_to(self.target);
                    return false;
                }
            }
        }

        if self.is_settled(config) {
            self.snap_to(self.target);
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run_until_settled(state: &mut SpringState, config: &SpringConfig) -> usize {
        let mut frames = 0;
        while state.step(config, FRAME) {
            frames += 1;
            assert!(frames < 10_000, "spring never settled: {:?}", state);
        }
        frames
    }

    #[test]
    fn default_is_underdamped() {
        let config = SpringConfig::default();
        let ratio = config.damping_ratio();
        assert!(ratio > 0.6 && ratio < 0.7, "ratio = {}", ratio);
        assert!(config.is_underdamped());
    }

    #[test]
    fn critically_damped_ratio_is_one() {
        let config = SpringConfig::critically_damped(1.0, 120.0);
        assert!((config.damping_ratio() - 1.0).abs() < 1e-5);
        assert!(!config.is_underdamped());
    }

    #[test]
    fn settles_on_target() {
        let config = SpringConfig::default();
        let mut state = SpringState::at_rest(12.0);
        state.retarget(0.0);
        run_until_settled(&mut state, &config);
        assert_eq!(state.position, 0.0);
        assert_eq!(state.velocity, 0.0);
    }

    #[test]
    fn settled_spring_stays_put() {
        let config = SpringConfig::default();
        let mut state = SpringState::at_rest(3.0);
        assert!(!state.step(&config, FRAME));
        assert_eq!(state, SpringState::at_rest(3.0));
    }

    #[test]
    fn retarget_keeps_velocity() {
        let config = SpringConfig::default();
        let mut state = SpringState::at_rest(0.0);
        state.retarget(10.0);
        for _ in 0..5 {
            state.step(&config, FRAME);
        }
        let before = state;
        state.retarget(-10.0);
        assert_eq!(state.position, before.position);
        assert_eq!(state.velocity, before.velocity);
        assert_eq!(state.target, -10.0);
    }

    #[test]
    fn overshoot_clamping_stops_at_target() {
        let config = SpringConfig {
            damping: 2.0,
            overshoot_clamping: true,
            ..SpringConfig::default()
        };
        let mut state = SpringState::at_rest(10.0);
        state.retarget(0.0);
        let mut lowest = f32::MAX;
        while state.step(&config, FRAME) {
            lowest = lowest.min(state.position);
        }
        assert!(lowest >= 0.0);
        assert_eq!(state.position, 0.0);
    }

    #[test]
    fn long_frame_is_capped() {
        let config = SpringConfig::default();
        let mut capped = SpringState::at_rest(10.0);
        capped.retarget(0.0);
        let mut reference = capped;

        capped.step(&config, 5.0);
        reference.step(&config, MAX_FRAME_DELTA);
        assert_eq!(capped, reference);
    }

    #[test]
    fn non_finite_dt_does_not_move() {
        let config = SpringConfig::default();
        let mut state = SpringState::at_rest(10.0);
        state.retarget(0.0);
        assert!(state.step(&config, f32::NAN));
        assert_eq!(state.position, 10.0);
    }

    #[test]
    fn stability_bound() {
        assert!(SpringConfig::default().is_stable());
        assert!(SpringConfig::critically_damped(1.0, 2_000.0).is_stable());
        let stiff = SpringConfig {
            stiffness: 57_700.0,
            damping: 0.0,
            ..SpringConfig::default()
        };
        assert!(!stiff.is_stable());
    }

    #[test]
    fn diverging_spring_snaps_to_target() {
        let config = SpringConfig {
            stiffness: 1.0e7,
            ..SpringConfig::default()
        };
        let mut state = SpringState::at_rest(20.0);
        state.retarget(0.0);
        let mut frames = 0;
        while state.step(&config, FRAME) {
            frames += 1;
            assert!(frames < 1_000, "spring never settled: {:?}", state);
        }
        assert_eq!(state, SpringState::at_rest(0.0));
    }

    #[test]
    fn validate_rejects_bad_parameters() {
        let bad = [
            SpringConfig {
                mass: 0.0,
                ..SpringConfig::default()
            },
            SpringConfig {
                stiffness: -1.0,
                ..SpringConfig::default()
            },
            SpringConfig {
                damping: f32::NAN,
                ..SpringConfig::default()
            },
            SpringConfig {
                rest_speed_threshold: 0.0,
                ..SpringConfig::default()
            },
            SpringConfig {
                stiffness: 100_000.0,
                ..SpringConfig::default()
            },
            SpringConfig {
                damping: 500.0,
                ..SpringConfig::default()
            },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{:?}", config);
        }
        assert!(SpringConfig::default().validate().is_ok());
    }
}
