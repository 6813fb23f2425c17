//! Physics module - axis-aligned bodies, gravity and platform landing.
//!
//! The game only models flat ground: bodies fall under gravity and land on
//! top of platforms. There is no side or ceiling collision.

mod aabb;
mod step;

pub use aabb::Aabb;
pub use step::*;
