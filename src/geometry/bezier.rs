//! Cubic Bézier boundaries
//!
//! Sweep intersection works in the power basis: expand x(t) and y(t) as
//! cubic polynomials, substitute into the sweep line's implicit equation,
//! and solve the resulting single cubic.

use super::poly::solve_cubic;
use super::{Segment, Vec2};

/// Cubic Bézier curve with the standard four control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

impl CubicBezier {
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    pub(crate) fn point_at(&self, t: f64) -> Vec2 {
        let u = 1.0 - t;
        u * u * u * self.p0
            + 3.0 * u * u * t * self.p1
            + 3.0 * u * t * t * self.p2
            + t * t * t * self.p3
    }

    pub(crate) fn derivative_at(&self, t: f64) -> Vec2 {
        let u = 1.0 - t;
        3.0 * u * u * (self.p1 - self.p0)
            + 6.0 * u * t * (self.p2 - self.p1)
            + 3.0 * t * t * (self.p3 - self.p2)
    }

    /// Bernstein-to-power-basis coefficients, highest degree first:
    /// `point_at(t) = c[0]*t^3 + c[1]*t^2 + c[2]*t + c[3]`.
    fn power_basis(&self) -> [Vec2; 4] {
        [
            -self.p0 + 3.0 * self.p1 - 3.0 * self.p2 + self.p3,
            3.0 * self.p0 - 6.0 * self.p1 + 3.0 * self.p2,
            -3.0 * self.p0 + 3.0 * self.p1,
            self.p0,
        ]
    }

    /// Parameters where the curve crosses the infinite-line extension of
    /// `sweep`: the real roots of one cubic, up to three.
    pub fn intersect_sweep(&self, sweep: &Segment, eps: f64) -> Vec<f64> {
        let line = sweep.implicit();
        let c = self.power_basis();
        let roots = solve_cubic(
            line.p * c[0].x + line.q * c[0].y,
            line.p * c[1].x + line.q * c[1].y,
            line.p * c[2].x + line.q * c[2].y,
            line.p * c[3].x + line.q * c[3].y - line.r,
        );
        roots
            .into_iter()
            .filter_map(|t| (-eps..=1.0 + eps).contains(&t).then(|| t.clamp(0.0, 1.0)))
            .collect()
    }
}
