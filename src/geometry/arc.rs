//! Circular arc boundaries

use std::f64::consts::TAU;

use super::line::is_zero;
use super::{Segment, Vec2};
use crate::positive_fmod;

/// Tolerance for angles recovered through `atan2`, which carries more
/// roundoff than the raw coordinate arithmetic.
const ANGLE_EPS: f64 = 1e-12;

/// Circular arc swept counterclockwise from `theta_min` to `theta_max`
/// around `center`.
///
/// The constructor normalizes both angles into `[0, 2π)` and then lifts
/// `theta_max` by one turn when needed, so the stored span
/// `theta_max - theta_min` is always in `(0, 2π]`. Equal input angles
/// therefore describe a full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Vec2,
    pub radius: f64,
    pub theta_min: f64,
    pub theta_max: f64,
}

impl Arc {
    /// `radius` must be strictly positive; a zero-radius "arc" has no
    /// meaningful parameterization.
    pub fn new(center: Vec2, radius: f64, theta_min: f64, theta_max: f64) -> Self {
        debug_assert!(radius > 0.0, "arc radius must be positive");
        let theta_min = positive_fmod(theta_min, TAU);
        let mut theta_max = positive_fmod(theta_max, TAU);
        if theta_max <= theta_min {
            theta_max += TAU;
        }
        Self {
            center,
            radius,
            theta_min,
            theta_max,
        }
    }

    /// Counterclockwise angular extent, in `(0, 2π]`.
    #[inline]
    pub fn span(&self) -> f64 {
        self.theta_max - self.theta_min
    }

    #[inline]
    fn angle_at(&self, t: f64) -> f64 {
        crate::lerp(self.theta_min, self.theta_max, t)
    }

    pub(crate) fn point_at(&self, t: f64) -> Vec2 {
        let theta = self.angle_at(t);
        self.center + self.radius * Vec2::new(theta.cos(), theta.sin())
    }

    pub(crate) fn derivative_at(&self, t: f64) -> Vec2 {
        let theta = self.angle_at(t);
        self.radius * self.span() * Vec2::new(-theta.sin(), theta.cos())
    }

    /// Parameter of a point assumed to lie on the arc's circle. Points
    /// outside the angular span map to `t > 1`, which is how the sweep
    /// filter rejects them.
    pub(crate) fn inverse(&self, point: Vec2) -> f64 {
        let rel = point - self.center;
        let theta = positive_fmod(rel.y.atan2(rel.x), TAU);
        let offset = positive_fmod(theta - self.theta_min, TAU);
        // atan2 roundoff can land the start endpoint's angle just below
        // theta_min, wrapping the offset to almost a full turn; that point
        // is t = 0, not t = 2π/span
        if TAU - offset < ANGLE_EPS {
            return 0.0;
        }
        offset / self.span()
    }

    /// Line-circle intersection (Wolfram Circle-Line form) in
    /// center-relative coordinates, then angular-span filtering through
    /// [`Arc::inverse`].
    pub fn intersect_sweep(&self, sweep: &Segment, eps: f64) -> Vec<f64> {
        let rel1 = sweep.p1 - self.center;
        let rel2 = sweep.p2 - self.center;
        let d = rel2 - rel1;
        let dr2 = d.length_squared();
        let det = rel1.x * rel2.y - rel2.x * rel1.y;
        let delta = self.radius * self.radius * dr2 - det * det;
        if delta <= 0.0 {
            // no crossing (grazing tangency included)
            return Vec::new();
        }

        let points = if is_zero(delta) {
            vec![Vec2::new(det * d.y / dr2, -det * d.x / dr2)]
        } else {
            let sqrt_delta = delta.sqrt();
            vec![
                Vec2::new(
                    (det * d.y + d.x.copysign(d.y) * sqrt_delta) / dr2,
                    (-det * d.x + d.y.copysign(d.x) * sqrt_delta) / dr2,
                ),
                Vec2::new(
                    (det * d.y - d.x.copysign(d.y) * sqrt_delta) / dr2,
                    (-det * d.x - d.y.copysign(d.x) * sqrt_delta) / dr2,
                ),
            ]
        };

        points
            .into_iter()
            .filter_map(|rel| {
                let t = self.inverse(rel + self.center);
                (-eps..=1.0 + eps).contains(&t).then(|| t.clamp(0.0, 1.0))
            })
            .collect()
    }
}
