//! Chaotic billiard - point particles bouncing inside curved boundaries
//!
//! Core modules:
//! - `geometry`: curve primitives (segments, arcs, cubic Béziers) and the
//!   sweep-intersection machinery behind continuous collision detection
//! - `sim`: deterministic world stepping and the iterative CCD resolver
//! - `worldfile`: World <-> tagged JSON document adapter
//!
//! The simulation must stay pure and deterministic:
//! - Stable iteration order (curve/ball insertion order)
//! - Tunables threaded through [`SimConfig`], never process globals
//! - No rendering or platform dependencies

pub mod error;
pub mod geometry;
pub mod sim;
pub mod worldfile;

pub use error::{Error, Result};
pub use geometry::{Arc, Curve, CubicBezier, Segment, Vec2};
pub use sim::{Ball, SimConfig, World};

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: the `t` such that `lerp(a, b, t) == s`
#[inline]
pub fn inv_lerp(a: f64, b: f64, s: f64) -> f64 {
    (s - a) / (b - a)
}

/// Positive float modulus: result is in `[0, y)` even for negative `x`
#[inline]
pub fn positive_fmod(x: f64, y: f64) -> f64 {
    x.rem_euclid(y)
}

/// `n` evenly spaced values from `start` to `end`, endpoints included.
///
/// The last element is exactly `end` (no accumulated rounding drift).
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let delta = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n - 1).map(|i| start + delta * i as f64).collect();
            out.push(end);
            out
        }
    }
}
