//! Card configuration.
//!
//! Every field is optional in presets and falls back to the defaults below.
//! Construction through [`CardConfig::sanitized`] never fails: a bad value is
//! replaced and logged, and a bad tilt range turns the card static instead of
//! letting NaN reach the rendered transform.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{TiltError, TiltResult};
use crate::motion::MotionModel;
use crate::spring::SpringConfig;

pub const DEFAULT_WIDTH: f32 = 300.0;
pub const DEFAULT_HEIGHT: f32 = 450.0;
pub const DEFAULT_MAX_ANGLE: f32 = 12.0;
pub const DEFAULT_PARALLAX_OFFSET: f32 = 2.0;
pub const DEFAULT_SENSITIVITY: f32 = 0.3;
pub const DEFAULT_PERSPECTIVE: f32 = 1000.0;

/// Light reflection sliding across the card surface
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheenConfig {
    /// Horizontal travel of the sheen at full tilt, in display units
    pub sweep: f32,
    /// Opacity when the card is flat
    pub min_opacity: f32,
    /// Opacity at full tilt in either direction
    pub max_opacity: f32,
    /// Scale of the sheen layer so its edges never show
    pub scale: f32,
    /// Content counter-rotation at full tilt, as a fraction of max angle
    pub counter_rotation_ratio: f32,
}

impl Default for SheenConfig {
    fn default() -> Self {
        Self {
            sweep: 120.0,
            min_opacity: 0.2,
            max_opacity: 0.5,
            scale: 1.3,
            counter_rotation_ratio: 0.1,
        }
    }
}

impl SheenConfig {
    pub fn validate(&self) -> TiltResult<()> {
        let in_unit = |v: f32| (0.0..=1.0).contains(&v);
        if !in_unit(self.min_opacity)
            || !in_unit(self.max_opacity)
            || self.min_opacity > self.max_opacity
        {
            return Err(TiltError::InvalidOpacityRange {
                min: self.min_opacity,
                max: self.max_opacity,
            });
        }
        if !is_non_negative(self.sweep)
            || !is_positive(self.scale)
            || !is_non_negative(self.counter_rotation_ratio)
        {
            return Err(TiltError::InvalidSheen(format!(
                "parameters out of range: {:?}",
                self
            )));
        }
        Ok(())
    }
}

/// Everything that shapes one card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub width: f32,
    pub height: f32,
    /// Maximum rendered tilt in degrees; 0 renders a static card
    pub max_angle: f32,
    /// Inner content counter-shift at full tilt, in display units
    pub parallax_offset: f32,
    /// Degrees of tilt per display unit of drag
    pub sensitivity: f32,
    /// CSS perspective distance
    pub perspective: f32,
    pub motion: MotionModel,
    pub spring: SpringConfig,
    pub sheen: SheenConfig,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_angle: DEFAULT_MAX_ANGLE,
            parallax_offset: DEFAULT_PARALLAX_OFFSET,
            sensitivity: DEFAULT_SENSITIVITY,
            perspective: DEFAULT_PERSPECTIVE,
            motion: MotionModel::default(),
            spring: SpringConfig::default(),
            sheen: SheenConfig::default(),
        }
    }
}

fn is_positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

fn is_non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}

impl CardConfig {
    /// Card that tilts `max_angle` degrees and otherwise uses defaults.
    pub fn with_max_angle(max_angle: f32) -> Self {
        Self {
            max_angle,
            ..Self::default()
        }
    }

    /// A card with no tilt range never moves.
    pub fn is_static(&self) -> bool {
        self.max_angle == 0.0
    }

    /// Strict check, reporting the first invalid field.
    pub fn validate(&self) -> TiltResult<()> {
        if !is_positive(self.width) {
            return Err(TiltError::InvalidDimension {
                name: "width",
                value: self.width,
            });
        }
        if !is_positive(self.height) {
            return Err(TiltError::InvalidDimension {
                name: "height",
                value: self.height,
            });
        }
        if !is_positive(self.perspective) {
            return Err(TiltError::InvalidDimension {
                name: "perspective",
                value: self.perspective,
            });
        }
        if !is_non_negative(self.max_angle) {
            return Err(TiltError::InvalidMaxAngle(self.max_angle));
        }
        if !is_non_negative(self.parallax_offset) {
            return Err(TiltError::InvalidParallax(self.parallax_offset));
        }
        if !is_positive(self.sensitivity) {
            return Err(TiltError::InvalidSensitivity(self.sensitivity));
        }
        self.spring.validate()?;
        self.sheen.validate()
    }

    /// Replace every invalid field so the card can always render.
    ///
    /// An invalid `max_angle` becomes 0, which renders a flat card.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !is_positive(self.width) {
            tracing::warn!(width = self.width, "invalid card width, using default");
            self.width = defaults.width;
        }
        if !is_positive(self.height) {
            tracing::warn!(height = self.height, "invalid card height, using default");
            self.height = defaults.height;
        }
        if !is_positive(self.perspective) {
            tracing::warn!(perspective = self.perspective, "invalid perspective, using default");
            self.perspective = defaults.perspective;
        }
        if !is_non_negative(self.max_angle) {
            tracing::warn!(max_angle = self.max_angle, "invalid max angle, card will not tilt");
            self.max_angle = 0.0;
        }
        if !is_non_negative(self.parallax_offset) {
            tracing::warn!(
                parallax_offset = self.parallax_offset,
                "invalid parallax offset, using default"
            );
            self.parallax_offset = defaults.parallax_offset;
        }
        if !is_positive(self.sensitivity) {
            tracing::warn!(sensitivity = self.sensitivity, "invalid sensitivity, using default");
            self.sensitivity = defaults.sensitivity;
        }
        if let Err(e) = self.spring.validate() {
            tracing::warn!(error = %e, "invalid spring, using default");
            self.spring = defaults.spring;
        }
        if let Err(e) = self.sheen.validate() {
            tracing::warn!(error = %e, "invalid sheen, using default");
            self.sheen = defaults.sheen;
        }

        self
    }

    /// Parse a JSON preset. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> TiltResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON preset from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> TiltResult<Self> {
        let path = path.as_ref();
        tracing::debug!(?path, "loading card preset");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// `<config dir>/tiltcard/card.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tiltcard").join("card.json"))
    }
}
