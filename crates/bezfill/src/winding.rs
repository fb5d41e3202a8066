//! Winding order via the shoelace formula.
//!
//! The triangulator expects counterclockwise input; `normalize` establishes
//! that with a single in-place reversal. Zero-area (collinear) input counts as
//! "not clockwise" and is left as is.

use crate::types::Point2;

/// Rotational direction of a closed contour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Signed area exactly zero.
    Degenerate,
}

/// Signed area of the closed contour (positive for CCW).
///
/// Cyclic shoelace sum `Σ (x_i y_{i+1} − x_{i+1} y_i) / 2`; the closing edge
/// from the last point back to the first is implied.
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        twice += p.x * q.y - q.x * p.y;
    }
    twice * 0.5
}

pub fn orientation(points: &[Point2]) -> Winding {
    let a = signed_area(points);
    if a > 0.0 {
        Winding::CounterClockwise
    } else if a < 0.0 {
        Winding::Clockwise
    } else {
        Winding::Degenerate
    }
}

/// Reverse `points` in place if clockwise. Returns whether it reversed.
///
/// Idempotent: a second call never reverses.
pub fn normalize(points: &mut [Point2]) -> bool {
    if signed_area(points) < 0.0 {
        points.reverse();
        true
    } else {
        false
    }
}

/// Copying form of [`normalize`].
pub fn normalized(points: &[Point2]) -> Vec<Point2> {
    let mut out = points.to_vec();
    normalize(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;

    fn unit_square() -> Vec<Point2> {
        vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ]
    }

    #[test]
    fn unit_square_ccw_left_alone() {
        let sq = unit_square();
        assert!((signed_area(&sq) - 1.0).abs() < 1e-12);
        assert_eq!(orientation(&sq), Winding::CounterClockwise);
        let mut p = sq.clone();
        assert!(!normalize(&mut p));
        assert_eq!(p, sq);
    }

    #[test]
    fn reversed_square_restored() {
        let sq = unit_square();
        let mut p: Vec<_> = sq.iter().rev().copied().collect();
        assert_eq!(orientation(&p), Winding::Clockwise);
        assert!(normalize(&mut p));
        assert_eq!(p, sq);
    }

    #[test]
    fn collinear_is_degenerate_and_untouched() {
        let line = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
        assert_eq!(orientation(&line), Winding::Degenerate);
        assert_eq!(normalized(&line), line);
        assert_eq!(signed_area(&line[..2]), 0.0);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(
            coords in proptest::collection::vec((-5.0f64..5.0, -5.0f64..5.0), 3..24)
        ) {
            let pts: Vec<Point2> = coords.into_iter().map(|(x, y)| vector![x, y]).collect();
            // the sign of a rounding-level area is not stable under reordering
            prop_assume!(signed_area(&pts).abs() > 1e-9);
            let once = normalized(&pts);
            let twice = normalized(&once);
            prop_assert_eq!(&once, &twice);
            prop_assert!(signed_area(&once) >= 0.0);
        }
    }
}
