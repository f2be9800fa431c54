//! Color constants shared between inline styles and `GLOBAL_STYLES`.

/// Accent of the demo card face
pub const CYAN: &str = "#00ffff";
