//! Static CSS for the tilt card layers.
//!
//! Only layout and decoration live here; everything that changes per frame
//! is written inline by the components.

pub const TILT_CARD_STYLES: &str = r#"
/* === Tilt Card === */
.tilt-card {
  position: relative;
  background: transparent;
  z-index: 1;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.5);
  border-radius: 20px;
  touch-action: none;
  user-select: none;
  transform-style: preserve-3d;
  will-change: transform;
  cursor: grab;
}

.tilt-card.dragging {
  cursor: grabbing;
}

.tilt-card__inner {
  position: relative;
  width: 100%;
  height: 100%;
  background: #222;
  border: 1px solid #333;
  border-radius: 20px;
  overflow: hidden;
}

.tilt-card__content {
  position: relative;
  width: 100%;
  height: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  z-index: 1;
}

.tilt-card__sheen {
  position: absolute;
  inset: 0;
  z-index: 2;
  pointer-events: none;
}

.tilt-card__sheen-inner {
  position: absolute;
  width: 180%;
  height: 180%;
  top: -40%;
  left: -40%;
  background: linear-gradient(
    115deg,
    transparent,
    rgba(255, 255, 255, 0.05),
    rgba(255, 255, 255, 0.08),
    rgba(255, 255, 255, 0.05),
    transparent
  );
}
"#;
