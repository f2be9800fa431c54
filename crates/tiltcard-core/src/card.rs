//! One card instance: gesture, motion and style wired together.
//!
//! The controller owns all mutable state of a card and is only touched from
//! the UI loop. The host feeds it pointer events and frame ticks, and reads
//! back a [`TiltStyle`] to render.

use std::time::Duration;

use crate::config::CardConfig;
use crate::gesture::{GestureOutcome, PanEvent, PanGesture};
use crate::motion::TiltMotion;
use crate::style::TiltStyle;
use crate::types::Tilt;

/// Frame cadence of the animation driver (~60 Hz)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Clone, Debug)]
pub struct TiltController {
    config: CardConfig,
    gesture: PanGesture,
    motion: TiltMotion,
}

impl TiltController {
    /// Build a controller. Invalid configuration is repaired, never rejected.
    pub fn new(config: CardConfig) -> Self {
        let config = config.sanitized();
        tracing::debug!(
            max_angle = config.max_angle,
            motion = %config.motion,
            damping_ratio = config.spring.damping_ratio(),
            "tilt card created"
        );
        Self {
            gesture: PanGesture::new(config.sensitivity),
            motion: TiltMotion::new(config.motion, config.spring),
            config,
        }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    pub fn target(&self) -> Tilt {
        self.motion.target()
    }

    pub fn shaped(&self) -> Tilt {
        self.motion.shaped()
    }

    /// Feed one pointer event. Returns `true` when the card needs animation
    /// frames to catch up with the new target.
    pub fn handle(&mut self, event: PanEvent) -> bool {
        if self.config.is_static() {
            return false;
        }
        match self.gesture.handle(event) {
            GestureOutcome::Ignored => return false,
            GestureOutcome::Moved(target) => self.motion.drag_to(target),
            GestureOutcome::Released => {
                tracing::debug!(shaped = ?self.motion.shaped(), "card released");
                self.motion.release();
            }
        }
        self.is_animating()
    }

    /// Advance the springs by `dt`. Returns `false` once the card has come to
    /// rest and the frame driver may stop.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let moving = self.motion.tick(dt.as_secs_f32());
        if !moving {
            tracing::trace!(shaped = ?self.motion.shaped(), "card settled");
        }
        moving
    }

    pub fn is_animating(&self) -> bool {
        !self.motion.is_settled()
    }

    /// Presentation values for the current shaped tilt
    pub fn style(&self) -> TiltStyle {
        TiltStyle::derive(self.motion.shaped(), &self.config)
    }
}

impl Default for TiltController {
    fn default() -> Self {
        Self::new(CardConfig::default())
    }
}
