//! Landmark geometry helpers shared by gesture detection and cursor mapping

use crate::types::LandmarkPoint;

/// Euclidean distance between two landmarks in the image plane (z ignored)
pub fn distance(p1: LandmarkPoint, p2: LandmarkPoint) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}

/// Linearly map `value` from `from` onto `to`.
///
/// Values outside `from` are clamped to the matching endpoint of `to`.
pub fn interp(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = from;
    let (out_lo, out_hi) = to;

    if value <= in_lo {
        return out_lo;
    }
    if value >= in_hi {
        return out_hi;
    }

    out_lo + (value - in_lo) * (out_hi - out_lo) / (in_hi - in_lo)
}
