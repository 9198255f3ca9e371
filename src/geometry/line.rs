//! Implicit 2D lines
//!
//! A line is the set of points satisfying `p*x + q*y == r`. Segments convert
//! to this form for intersection tests: solving two implicit lines is a 2x2
//! linear system, which keeps the sweep-intersection code free of special
//! cases for vertical or horizontal geometry.

use super::Vec2;

/// Zero test for determinants and near-degenerate coefficients.
const ZERO_EPS: f64 = 1e-15;

#[inline]
pub(crate) fn is_zero(x: f64) -> bool {
    x.abs() < ZERO_EPS
}

/// The line `p*x + q*y = r`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub p: f64,
    pub q: f64,
    pub r: f64,
}

impl Line {
    pub fn new(p: f64, q: f64, r: f64) -> Self {
        Self { p, q, r }
    }

    /// Intersection point of two lines, `None` when they are parallel
    /// (which includes coincident lines: no single crossing point exists).
    pub fn intersection(&self, other: &Line) -> Option<Vec2> {
        let det = self.p * other.q - other.p * self.q;
        if is_zero(det) {
            return None;
        }
        // Cramer's rule
        let x = self.r * other.q - other.r * self.q;
        let y = self.p * other.r - other.p * self.r;
        Some(Vec2::new(x / det, y / det))
    }
}
