//! Range interpolation.
//!
//! Every presentation value of the card is a linear map from a tilt range to
//! an output range. The card always clamps, so a spring that momentarily
//! swings past its domain never pushes a style past its stated bounds.

use serde::{Deserialize, Serialize};

/// What happens when the input falls outside the input range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extrapolation {
    /// Pin the result to the nearest output bound
    #[default]
    Clamp,
    /// Keep following the line beyond the output range
    Extend,
    /// Return the input unchanged when it is out of range
    Identity,
}

/// Linearly map `value` from `input` to `output`.
///
/// A degenerate input range (equal or non-finite bounds) has no slope, so
/// the result is `output[0]`. A NaN `value` or output bound also yields
/// `output[0]`.
pub fn interpolate(
    value: f32,
    input: [f32; 2],
    output: [f32; 2],
    extrapolation: Extrapolation,
) -> f32 {
    let [in_lo, in_hi] = input;
    let [out_lo, out_hi] = output;

    // Halved so ranges near f32::MAX don't overflow to infinity.
    let half_span = in_hi * 0.5 - in_lo * 0.5;
    if value.is_nan()
        || !half_span.is_finite()
        || half_span == 0.0
        || out_lo.is_nan()
        || out_hi.is_nan()
    {
        return out_lo;
    }

    let below = value < in_lo.min(in_hi);
    let above = value > in_lo.max(in_hi);
    let mut progress = (value * 0.5 - in_lo * 0.5) / half_span;

    match extrapolation {
        Extrapolation::Clamp => progress = progress.clamp(0.0, 1.0),
        Extrapolation::Identity if below || above => return value,
        Extrapolation::Identity | Extrapolation::Extend => {}
    }

    let result = out_lo * (1.0 - progress) + out_hi * progress;

    // Rounding at the ends must not leak past the bounds in clamp mode.
    if extrapolation == Extrapolation::Clamp {
        result.clamp(out_lo.min(out_hi), out_lo.max(out_hi))
    } else {
        result
    }
}

/// Shorthand for [`interpolate`] with [`Extrapolation::Clamp`]
pub fn clamped(value: f32, input: [f32; 2], output: [f32; 2]) -> f32 {
    interpolate(value, input, output, Extrapolation::Clamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_midpoint() {
        assert_eq!(clamped(0.0, [-10.0, 10.0], [0.0, 100.0]), 50.0);
    }

    #[test]
    fn clamps_both_ends() {
        assert_eq!(clamped(50.0, [-12.0, 12.0], [-12.0, 12.0]), 12.0);
        assert_eq!(clamped(-50.0, [-12.0, 12.0], [-12.0, 12.0]), -12.0);
    }

    #[test]
    fn inverted_output_range() {
        assert_eq!(clamped(12.0, [-12.0, 12.0], [2.0, -2.0]), -2.0);
        assert_eq!(clamped(-12.0, [-12.0, 12.0], [2.0, -2.0]), 2.0);
        assert_eq!(clamped(99.0, [-12.0, 12.0], [2.0, -2.0]), -2.0);
    }

    #[test]
    fn extend_follows_the_line() {
        let v = interpolate(20.0, [0.0, 10.0], [0.0, 1.0], Extrapolation::Extend);
        assert!((v - 2.0).abs() < 1e-6);
    }

    #[test]
    fn identity_passes_out_of_range_input() {
        let v = interpolate(20.0, [0.0, 10.0], [0.0, 1.0], Extrapolation::Identity);
        assert_eq!(v, 20.0);
        let v = interpolate(5.0, [0.0, 10.0], [0.0, 1.0], Extrapolation::Identity);
        assert!((v - 0.5).abs() < 1e-6);
    }

    #[test]
    fn degenerate_range_is_finite() {
        assert_eq!(clamped(3.0, [0.0, 0.0], [0.2, 0.5]), 0.2);
        assert_eq!(clamped(0.0, [0.0, 0.0], [0.0, 0.0]), 0.0);
        assert_eq!(clamped(1.0, [f32::NAN, 1.0], [4.0, 5.0]), 4.0);
    }

    #[test]
    fn nan_and_infinity() {
        assert_eq!(clamped(f32::NAN, [-1.0, 1.0], [7.0, 9.0]), 7.0);
        assert_eq!(clamped(f32::INFINITY, [-1.0, 1.0], [7.0, 9.0]), 9.0);
        assert_eq!(clamped(f32::NEG_INFINITY, [-1.0, 1.0], [7.0, 9.0]), 7.0);
    }

    #[test]
    fn huge_symmetric_range_maps_midpoint() {
        let max = f32::MAX;
        assert_eq!(clamped(0.0, [-max, max], [-max, max]), 0.0);
        assert_eq!(clamped(max, [-max, max], [-max, max]), max);
        assert_eq!(clamped(-max, [-max, max], [2.0, -2.0]), 2.0);
        assert_eq!(clamped(0.0, [-max, max], [2.0, -2.0]), 0.0);
    }
}
