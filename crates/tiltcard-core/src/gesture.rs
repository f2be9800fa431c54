//! Pan gesture capture.
//!
//! Turns raw pointer events into a cumulative translation from the point
//! where the drag began, then into a target tilt. A card follows exactly one
//! pointer; a second pointer is ignored until the first one lifts.

use crate::types::{Tilt, Translation};

/// Identifies a pointer across its down/move/up events
pub type PointerId = i32;

/// Pointer events as delivered by the host UI, in absolute coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanEvent {
    Begin { pointer_id: PointerId, x: f32, y: f32 },
    Update { pointer_id: PointerId, x: f32, y: f32 },
    End { pointer_id: PointerId },
    /// The host abandoned the gesture (focus lost, pointer left the card)
    Cancel { pointer_id: PointerId },
}

/// What a [`PanEvent`] meant for the card
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    /// Nothing changes: foreign pointer, no active drag, bad coordinates
    Ignored,
    /// The drag moved; here is the new target tilt
    Moved(Tilt),
    /// The drag is over; the target returns to zero
    Released,
}

/// Map a drag translation to a target tilt.
///
/// Dragging down tilts the top edge away (`x` negative), dragging right
/// turns the card toward the right (`y` positive), so the corner under the
/// finger appears pressed in.
pub fn target_for_translation(translation: Translation, sensitivity: f32) -> Tilt {
    Tilt::new(-translation.dy * sensitivity, translation.dx * sensitivity)
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ActiveDrag {
    pointer_id: PointerId,
    origin_x: f32,
    origin_y: f32,
}

/// Single-pointer pan recognizer
#[derive(Clone, Debug)]
pub struct PanGesture {
    sensitivity: f32,
    active: Option<ActiveDrag>,
    translation: Translation,
}

impl PanGesture {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            active: None,
            translation: Translation::default(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Translation of the current drag, zero when idle
    pub fn translation(&self) -> Translation {
        self.translation
    }

    pub fn handle(&mut self, event: PanEvent) -> GestureOutcome {
        match event {
            PanEvent::Begin { pointer_id, x, y } => {
                if let Some(active) = self.active {
                    tracing::debug!(
                        active = active.pointer_id,
                        ignored = pointer_id,
                        "second pointer ignored"
                    );
                    return GestureOutcome::Ignored;
                }
                if !x.is_finite() || !y.is_finite() {
                    tracing::warn!(x, y, "pan begin with non-finite coordinates dropped");
                    return GestureOutcome::Ignored;
                }
                self.active = Some(ActiveDrag {
                    pointer_id,
                    origin_x: x,
                    origin_y: y,
                });
                self.translation = Translation::default();
                tracing::trace!(pointer_id, x, y, "pan began");
                GestureOutcome::Moved(Tilt::ZERO)
            }
            PanEvent::Update { pointer_id, x, y } => {
                let Some(active) = self.active.filter(|a| a.pointer_id == pointer_id) else {
                    return GestureOutcome::Ignored;
                };
                if !x.is_finite() || !y.is_finite() {
                    tracing::warn!(x, y, "pan update with non-finite coordinates dropped");
                    return GestureOutcome::Ignored;
                }
                self.translation = Translation::new(x - active.origin_x, y - active.origin_y);
                GestureOutcome::Moved(target_for_translation(self.translation, self.sensitivity))
            }
            PanEvent::End { pointer_id } | PanEvent::Cancel { pointer_id } => {
                if self.active.map(|a| a.pointer_id) != Some(pointer_id) {
                    return GestureOutcome::Ignored;
                }
                self.active = None;
                self.translation = Translation::default();
                tracing::trace!(pointer_id, "pan ended");
                GestureOutcome::Released
            }
        }
    }
}
