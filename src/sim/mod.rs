//! Deterministic simulation module
//!
//! All stepping logic lives here. This module must stay pure and
//! deterministic:
//! - Curves and balls keep insertion order; that order is the tie-break
//!   contract for simultaneous contacts
//! - Tunables travel in [`SimConfig`], never process-wide globals
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod world;

pub use ball::Ball;
pub use collision::{SimConfig, resolve_ball};
pub use world::World;
