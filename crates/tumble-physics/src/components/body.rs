use crate::core::math::Aabb;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A movable rectangle driven by gravity and velocity.
///
/// `size` never changes during simulation. `prev_pos` is snapshotted at
/// the start of every substep and is what the resolver rolls back to on
/// contact. `collided` is recomputed from scratch each frame — it is
/// the ORed result of that frame's substeps, never sticky.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub aabb: Aabb,
    /// Velocity in units per frame.
    pub velocity: Vec2,
    /// Position at the start of the current substep.
    pub prev_pos: Vec2,
    /// Whether any substep of the last frame hit an obstacle.
    pub collided: bool,
}

impl Body {
    /// Create a resting body at the given rectangle.
    pub fn new(aabb: Aabb) -> Self {
        Self {
            aabb,
            velocity: Vec2::ZERO,
            prev_pos: aabb.pos,
            collided: false,
        }
    }

    // -- Builder pattern --

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Current top-left position.
    pub fn pos(&self) -> Vec2 {
        self.aabb.pos
    }

    /// Width and height.
    pub fn size(&self) -> Vec2 {
        self.aabb.size
    }
}
