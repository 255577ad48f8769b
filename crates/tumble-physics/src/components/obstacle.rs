use crate::core::math::Aabb;
use serde::{Deserialize, Serialize};

/// A static rectangle. Never moves, never collides with other
/// obstacles; bodies resolve against the world's obstacle set.
///
/// Distinguishing statics and movables at the type level keeps
/// "does this thing have a velocity" a compile-time fact instead of a
/// runtime probe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub aabb: Aabb,
}

impl Obstacle {
    pub fn new(aabb: Aabb) -> Self {
        Self { aabb }
    }
}
