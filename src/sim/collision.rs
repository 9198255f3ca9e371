//! Continuous collision detection and response
//!
//! The tricky part of the crate: a ball's integrated motion is a straight
//! segment that may cross several boundary curves, or the same curve several
//! times, within a single timestep. The resolver walks those crossings in
//! the order they occur, reflecting position and velocity at each one, until
//! no crossing remains inside the step or the iteration bound is hit.
//!
//! A single endpoint-only test would tunnel through thin features at speed
//! and would miss multi-bounce corners entirely; the sweep test with an
//! explicit dead zone and iteration bound gives bounded-time, tunneling-free
//! resolution that stays deterministic for a fixed curve order.

use crate::error::Result;
use crate::geometry::{Curve, Segment, Vec2};

use super::ball::Ball;

/// Resolver tunables. Passed explicitly so tests can exercise edge
/// tolerances; nothing in the crate reads these from a global.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Tolerance with a double duty: the dead zone suppressing immediate
    /// re-detection of the previous contact point, and the grouping radius
    /// for near-simultaneous (corner) contacts.
    pub eps: f64,
    /// Upper bound on reflection iterations per ball per step. Hitting it
    /// is a diagnostic, not an error: a ball wedged in a zero-width corner
    /// can chatter forever otherwise.
    pub max_collision_iters: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            eps: 1e-10,
            max_collision_iters: 1000,
        }
    }
}

/// A candidate contact surviving the relevance filters.
struct Contact {
    /// Curve parameter of the crossing.
    t: f64,
    /// The crossing point in world coordinates.
    point: Vec2,
    /// Distance from the ball's sub-segment start; the selection key.
    dist: f64,
    /// Index into the world's curve list.
    curve: usize,
}

/// Resolve all boundary crossings of one already-integrated ball.
///
/// On entry `ball.pos` is the naively advanced position and
/// `ball.pos_prev` the pre-integration one. Returns `Ok(true)` when the
/// contact chain settled, `Ok(false)` when the iteration bound cut it off
/// (the ball keeps its last computed state either way).
///
/// # Errors
///
/// Propagates geometry failures (degenerate curves with no tangent).
pub fn resolve_ball(ball: &mut Ball, curves: &[Curve], config: &SimConfig) -> Result<bool> {
    let mut contacts: Vec<Contact> = Vec::new();

    for _ in 0..config.max_collision_iters {
        contacts.clear();

        if ball.pos == ball.pos_prev {
            // no remaining motion this step (zero dt, zero velocity, or a
            // reflection that landed exactly on the contact): a degenerate
            // trajectory cannot cross anything
            return Ok(true);
        }

        let trajectory = Segment::new(ball.pos_prev, ball.pos);
        // Probe along the velocity direction instead of the trajectory:
        // vel is tangent to the motion by construction, and unlike the
        // trajectory segment it cannot collapse to a point when the ball
        // was just snapped onto a curve.
        let probe = Segment::new(ball.pos, ball.pos + ball.vel);

        for (index, curve) in curves.iter().enumerate() {
            for t in curve.intersect_sweep(&probe, config.eps) {
                let point = curve.evaluate(t)?;

                // only crossings on the actually-traveled sub-segment count
                let t_traj = trajectory.inverse(point);
                if !(-config.eps..=1.0 + config.eps).contains(&t_traj) {
                    continue;
                }

                // dead zone: the contact the ball was just placed at
                let dist = (point - ball.pos_prev).length();
                if dist < config.eps {
                    continue;
                }

                contacts.push(Contact {
                    t,
                    point,
                    dist,
                    curve: index,
                });
            }
        }

        if contacts.is_empty() {
            // nothing left to resolve within this step
            return Ok(true);
        }

        let dmin = contacts
            .iter()
            .map(|c| c.dist)
            .fold(f64::INFINITY, f64::min);

        // Reflect every contact tied for closest, sequentially in curve
        // order. A ball striking an exact corner sees both walls at the
        // same distance; composing the reflections one after the other is
        // what turns that into the expected double-axis inversion.
        for contact in &contacts {
            if contact.dist - dmin > config.eps {
                continue;
            }

            let m = curves[contact.curve].tangent(contact.t)?;
            let n = m.perp();

            // mirror the normal component of the overshoot and of the
            // velocity across the local tangent line; keep the tangential
            // components (perfectly elastic bounce)
            let diff = ball.pos - contact.point;
            ball.pos = contact.point - n.dot(diff) * n + m.dot(diff) * m;
            ball.vel = -n.dot(ball.vel) * n + m.dot(ball.vel) * m;
            // the contact becomes the start of the remaining sub-segment
            ball.pos_prev = contact.point;
        }
    }

    Ok(false)
}
