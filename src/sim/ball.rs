//! Ball state

use crate::geometry::Vec2;

/// A point particle.
///
/// `pos_prev` is not "last frame's position": during collision resolution it
/// is reassigned to each successive contact point, so it always holds the
/// position at the start of the currently-unresolved sub-segment of motion.
/// At the start of a step `pos_prev == pos`; right after integration it is
/// the pre-integration position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub pos_prev: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            pos_prev: pos,
            vel,
        }
    }
}
