//! Straight boundary segments

use super::Vec2;
use super::line::{Line, is_zero};

/// Finite straight boundary from `p1` to `p2`, parameterized as
/// `(1 - t) * p1 + t * p2` for `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl Segment {
    pub fn new(p1: Vec2, p2: Vec2) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub(crate) fn point_at(&self, t: f64) -> Vec2 {
        self.p1.lerp(self.p2, t)
    }

    #[inline]
    pub(crate) fn derivative_at(&self, _t: f64) -> Vec2 {
        self.p2 - self.p1
    }

    /// The implicit line through this segment: `p*x + q*y = r` with
    /// `p = -(y2 - y1)`, `q = x2 - x1`, `r = p*x1 + q*y1`.
    pub fn implicit(&self) -> Line {
        let p = -(self.p2.y - self.p1.y);
        let q = self.p2.x - self.p1.x;
        Line::new(p, q, p * self.p1.x + q * self.p1.y)
    }

    /// Parameter of a point assumed to lie on the segment's line.
    ///
    /// Projects along the dominant axis for precision; a point off the line
    /// gets the parameter of its dominant-axis shadow. Degenerate segments
    /// (`p1 == p2`) answer 0.
    pub fn inverse(&self, point: Vec2) -> f64 {
        let dx = (self.p2.x - self.p1.x).abs();
        let dy = (self.p2.y - self.p1.y).abs();
        if is_zero(dx) && is_zero(dy) {
            return 0.0;
        }
        if dx > dy {
            crate::inv_lerp(self.p1.x, self.p2.x, point.x)
        } else {
            crate::inv_lerp(self.p1.y, self.p2.y, point.y)
        }
    }

    /// Parameters where this segment crosses the infinite-line extension of
    /// `sweep`: zero or one, since both are straight.
    pub fn intersect_sweep(&self, sweep: &Segment, eps: f64) -> Vec<f64> {
        let Some(point) = self.implicit().intersection(&sweep.implicit()) else {
            // parallel: no single crossing
            return Vec::new();
        };
        let t = self.inverse(point);
        if (-eps..=1.0 + eps).contains(&t) {
            vec![t.clamp(0.0, 1.0)]
        } else {
            Vec::new()
        }
    }
}
