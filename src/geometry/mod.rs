//! Curve primitives and sweep intersection
//!
//! Every boundary curve maps a parameter `t` in `[0, 1]` to a point, and can
//! report where it crosses the infinite-line extension of a "sweep segment"
//! (a particle's straight-line path during one sub-step). That sweep query is
//! the entire interface continuous collision detection needs.

pub mod arc;
pub mod bezier;
pub mod line;
pub mod poly;
pub mod segment;

pub use arc::Arc;
pub use bezier::CubicBezier;
pub use line::Line;
pub use segment::Segment;

use crate::error::{Error, Result};

/// 2D vector with f64 components. `perp()` is the 90°-rotation `ortho`
/// operator: `perp((x, y)) == (-y, x)`.
pub type Vec2 = glam::DVec2;

/// Unit vector in the direction of `v`.
///
/// # Errors
///
/// Returns [`Error::ZeroVector`] for the zero vector. Never substitutes a
/// zero result: a silent fallback here would mask upstream logic errors in
/// the collision resolver.
#[inline]
pub fn normalize(v: Vec2) -> Result<Vec2> {
    v.try_normalize().ok_or(Error::ZeroVector)
}

/// Rejects parameters outside the curve domain `[0, 1]`.
#[inline]
pub(crate) fn check_param(t: f64) -> Result<()> {
    if (0.0..=1.0).contains(&t) {
        Ok(())
    } else {
        Err(Error::ParameterOutOfRange { t })
    }
}

/// A boundary curve.
///
/// This is a closed set of kinds: adding one means extending the enum and
/// implementing the full capability set (`evaluate`, `tangent`,
/// `intersect_sweep`), never open-ended trait objects. The collision
/// resolver and the world-file adapter both match exhaustively on it.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    Segment(Segment),
    Arc(Arc),
    CubicBezier(CubicBezier),
}

impl Curve {
    /// Position at parameter `t` in `[0, 1]`.
    pub fn evaluate(&self, t: f64) -> Result<Vec2> {
        check_param(t)?;
        Ok(self.point_at(t))
    }

    /// First derivative with respect to `t`. Not normalized.
    pub fn derivative(&self, t: f64) -> Result<Vec2> {
        check_param(t)?;
        Ok(match self {
            Curve::Segment(s) => s.derivative_at(t),
            Curve::Arc(a) => a.derivative_at(t),
            Curve::CubicBezier(b) => b.derivative_at(t),
        })
    }

    /// Unit tangent at `t`. Fails with [`Error::ZeroVector`] where the
    /// derivative vanishes (degenerate geometry).
    pub fn tangent(&self, t: f64) -> Result<Vec2> {
        normalize(self.derivative(t)?)
    }

    /// Unit normal at `t`: the tangent rotated by 90°. The sign is not
    /// semantically fixed; the resolver is symmetric in it.
    pub fn ortho(&self, t: f64) -> Result<Vec2> {
        Ok(self.tangent(t)?.perp())
    }

    /// Curve parameters at which this curve crosses the infinite-line
    /// extension of `sweep`, filtered to `[0 - eps, 1 + eps]` and clamped
    /// into the domain. Bounding the hit to the swept range is the
    /// caller's job.
    pub fn intersect_sweep(&self, sweep: &Segment, eps: f64) -> Vec<f64> {
        match self {
            Curve::Segment(s) => s.intersect_sweep(sweep, eps),
            Curve::Arc(a) => a.intersect_sweep(sweep, eps),
            Curve::CubicBezier(b) => b.intersect_sweep(sweep, eps),
        }
    }

    /// `n` points along the curve (for rendering or debugging).
    pub fn sample(&self, n: usize) -> Vec<Vec2> {
        crate::linspace(0.0, 1.0, n)
            .into_iter()
            .map(|t| self.point_at(t))
            .collect()
    }

    /// Unchecked evaluation; callers guarantee `t` is in `[0, 1]`.
    pub(crate) fn point_at(&self, t: f64) -> Vec2 {
        match self {
            Curve::Segment(s) => s.point_at(t),
            Curve::Arc(a) => a.point_at(t),
            Curve::CubicBezier(b) => b.point_at(t),
        }
    }
}

impl From<Segment> for Curve {
    fn from(s: Segment) -> Self {
        Curve::Segment(s)
    }
}

impl From<Arc> for Curve {
    fn from(a: Arc) -> Self {
        Curve::Arc(a)
    }
}

impl From<CubicBezier> for Curve {
    fn from(b: CubicBezier) -> Self {
        Curve::CubicBezier(b)
    }
}
