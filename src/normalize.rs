//! Range normalization and the arc geometry derived from it.

use serde::{Deserialize, Serialize};

/// Map `value` within the range `[start, end]` to a fraction of that range.
///
/// This is a pure affine transform and is intentionally NOT clamped: values
/// outside the range produce fractions below 0.0 or above 1.0, and callers
/// own any visual clamping. `start` need not be less than `end`; a reversed
/// range simply inverts the fraction.
///
/// When `start == end` the result is non-finite (IEEE-754 division by
/// zero). This is documented rather than guarded; the validated entry
/// points reject degenerate ranges before reaching here.
pub fn normalize(start: f64, end: f64, value: f64) -> f64 {
    (value - start) / (end - start)
}

/// Edge length of the SVG viewbox the gauge circle lives in.
pub const VIEWBOX_SIZE: f64 = 200.0;

/// Circle radius: 45% of the viewbox.
pub const RADIUS: f64 = VIEWBOX_SIZE * 0.45;

/// Dash geometry for the filled share of the gauge circle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ArcGeometry {
    /// Length of the stroked (filled) part of the circumference.
    pub filled: f64,
    /// Dash period; everything past `filled` up to this length is a gap.
    pub period: f64,
}

impl ArcGeometry {
    /// Derive dash geometry from a normalized fraction.
    ///
    /// The fraction is used as supplied. Out-of-range fractions produce a
    /// filled length longer than the circumference (or negative), which the
    /// host may clamp visually.
    pub fn from_fraction(fraction: f64) -> Self {
        Self {
            filled: fraction * 2.0 * std::f64::consts::PI * RADIUS,
            period: 10.0 * RADIUS,
        }
    }

    /// Render as an SVG `stroke-dasharray` value.
    pub fn dash_array(&self) -> String {
        format!("{} {}", self.filled, self.period)
    }
}
