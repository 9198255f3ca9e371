//! World ownership and stepping

use crate::error::Result;
use crate::geometry::Curve;

use super::ball::Ball;
use super::collision::{SimConfig, resolve_ball};

/// Owns the boundary curves and the balls, and advances the simulation.
///
/// Both collections are append-only and keep insertion order. That order is
/// part of the contract: when a ball strikes several curves at exactly the
/// same distance (a corner), the tied reflections are applied in curve
/// insertion order, so a given world always resolves the same way.
#[derive(Debug, Clone, Default)]
pub struct World {
    curves: Vec<Curve>,
    balls: Vec<Ball>,
    config: SimConfig,
    non_converged: u64,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn add_curve(&mut self, curve: impl Into<Curve>) {
        self.curves.push(curve.into());
    }

    pub fn add_ball(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn ball(&self, index: usize) -> Option<&Ball> {
        self.balls.get(index)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// How many times a ball's contact chain failed to settle within the
    /// iteration bound since this world was created. Expected to stay 0 for
    /// sane geometry; grazing contacts and zero-width wedges can tick it.
    pub fn non_converged(&self) -> u64 {
        self.non_converged
    }

    /// Advance every ball by `dt`: integrate the free motion, then resolve
    /// all boundary crossings that occurred along it.
    ///
    /// Curves are immutable during the call and balls never interact, so
    /// per-ball resolution is independent (the loop is sequential but
    /// trivially parallelizable).
    ///
    /// # Errors
    ///
    /// Propagates geometry failures from degenerate curves; ball state
    /// already committed for this step is kept.
    pub fn step(&mut self, dt: f64) -> Result<()> {
        for ball in &mut self.balls {
            ball.pos_prev = ball.pos;
            ball.pos += ball.vel * dt;
        }

        for index in 0..self.balls.len() {
            let settled = resolve_ball(&mut self.balls[index], &self.curves, &self.config)?;
            if !settled {
                self.non_converged += 1;
                log::warn!(
                    "ball {index}: contact chain did not settle within {} iterations",
                    self.config.max_collision_iters
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Arc, CubicBezier, Segment, Vec2};
    use approx::assert_relative_eq;
    use std::f64::consts::TAU;

    fn assert_ball(ball: &Ball, pos: Vec2, vel: Vec2) {
        assert_relative_eq!(ball.pos.x, pos.x, epsilon = 1e-9);
        assert_relative_eq!(ball.pos.y, pos.y, epsilon = 1e-9);
        assert_relative_eq!(ball.vel.x, vel.x, epsilon = 1e-9);
        assert_relative_eq!(ball.vel.y, vel.y, epsilon = 1e-9);
    }

    /// Two segments meeting near a right-angle wedge; one ball clips the
    /// corner curve-by-curve, the other strikes the exact corner point.
    /// Both must come out with both velocity axes inverted.
    #[test]
    fn test_corner_double_reflection() {
        let mut world = World::new();
        world.add_curve(Segment::new(Vec2::new(2.0, 1.0), Vec2::new(2.0, 4.0)));
        world.add_curve(Segment::new(Vec2::new(1.0, 2.0), Vec2::new(4.0, 2.0)));
        world.add_ball(Ball::new(Vec2::new(-1.0, 1.0), Vec2::new(2.0, 1.0)));
        world.add_ball(Ball::new(Vec2::new(0.0, 1.0), Vec2::new(2.0, 1.0)));

        world.step(10.0).unwrap();

        assert_ball(
            &world.balls()[0],
            Vec2::new(-15.0, -7.0),
            Vec2::new(-2.0, -1.0),
        );
        assert_ball(
            &world.balls()[1],
            Vec2::new(-16.0, -7.0),
            Vec2::new(-2.0, -1.0),
        );
        assert_eq!(world.non_converged(), 0);
    }

    #[test]
    fn test_no_crossing_is_plain_integration() {
        let mut world = World::new();
        world.add_curve(Segment::new(Vec2::new(100.0, -1.0), Vec2::new(100.0, 1.0)));
        world.add_ball(Ball::new(Vec2::new(1.0, 2.0), Vec2::new(0.5, -0.25)));

        world.step(2.0).unwrap();

        let ball = world.ball(0).unwrap();
        assert_eq!(ball.pos_prev, Vec2::new(1.0, 2.0));
        assert_eq!(ball.pos, Vec2::new(2.0, 1.5));
        assert_eq!(ball.vel, Vec2::new(0.5, -0.25));
    }

    #[test]
    fn test_ball_bounces_inside_circle() {
        let mut world = World::new();
        world.add_curve(Arc::new(Vec2::ZERO, 5.0, 0.0, TAU));
        world.add_ball(Ball::new(Vec2::ZERO, Vec2::new(1.0, 0.0)));

        // reaches the circle at (5, 0) and comes straight back to the center
        world.step(10.0).unwrap();
        assert_ball(
            world.ball(0).unwrap(),
            Vec2::ZERO,
            Vec2::new(-1.0, 0.0),
        );
    }

    #[test]
    fn test_ball_bounces_off_bezier_floor() {
        let mut world = World::new();
        // control points evenly spaced along y = 0: a flat floor
        world.add_curve(CubicBezier::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 0.0),
        ));
        world.add_ball(Ball::new(Vec2::new(1.5, 1.0), Vec2::new(0.0, -1.0)));

        world.step(2.0).unwrap();
        assert_ball(
            world.ball(0).unwrap(),
            Vec2::new(1.5, 1.0),
            Vec2::new(0.0, 1.0),
        );
    }

    #[test]
    fn test_balls_pass_through_each_other() {
        // no ball-ball coupling: two balls on a collision course swap sides
        let mut world = World::new();
        world.add_ball(Ball::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)));
        world.add_ball(Ball::new(Vec2::new(2.0, 0.0), Vec2::new(-1.0, 0.0)));

        world.step(2.0).unwrap();
        assert_eq!(world.balls()[0].pos, Vec2::new(2.0, 0.0));
        assert_eq!(world.balls()[1].pos, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_iteration_bound_is_observable() {
        let mut world = World::with_config(SimConfig {
            max_collision_iters: 1,
            ..SimConfig::default()
        });
        world.add_curve(Segment::new(Vec2::new(2.0, 1.0), Vec2::new(2.0, 4.0)));
        world.add_curve(Segment::new(Vec2::new(1.0, 2.0), Vec2::new(4.0, 2.0)));
        // needs two reflection iterations, the bound allows one
        world.add_ball(Ball::new(Vec2::new(-1.0, 1.0), Vec2::new(2.0, 1.0)));

        world.step(10.0).unwrap();
        assert_eq!(world.non_converged(), 1);
        // best-effort: the ball kept the state of its first reflection
        let ball = world.ball(0).unwrap();
        assert!(ball.pos.is_finite());
        assert_eq!(ball.vel, Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_termination_under_default_bound() {
        // degenerate-ish geometry: a tight wedge the ball rattles around in
        let mut world = World::new();
        world.add_curve(Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.1)));
        world.add_curve(Segment::new(Vec2::new(0.0, 0.5), Vec2::new(10.0, 0.4)));
        world.add_ball(Ball::new(Vec2::new(5.0, 0.25), Vec2::new(40.0, 3.0)));

        // must return regardless of how many bounces occur
        for _ in 0..50 {
            world.step(0.1).unwrap();
        }
    }
}
