use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle: top-left corner plus non-negative extent.
///
/// All simulation math stays in `f32`; truncating to integers mid-frame
/// makes bodies oscillate between falling and standing under small
/// gravity, so rounding is strictly a display-time concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner in world space.
    pub pos: Vec2,
    /// Width and height, both `>= 0`.
    pub size: Vec2,
}

impl Aabb {
    /// Create a rectangle from corner and extent.
    ///
    /// # Panics
    /// Panics on negative width or height — bad geometry is a
    /// programming defect, not recoverable input.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        if w < 0.0 || h < 0.0 {
            panic!("negative extent for Aabb: {}x{}", w, h);
        }
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Y coordinate of the bottom edge (Y-down).
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Overlap test with strict inequalities on all four comparisons:
    /// rectangles that merely share an edge are not colliding.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}
