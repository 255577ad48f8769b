use crate::api::config::WorldConfig;
use crate::api::types::{BodyId, ObstacleId};
use crate::components::body::Body;
use crate::components::obstacle::Obstacle;
use crate::core::math::Aabb;
use crate::core::sweep;

/// The simulation container: static obstacles, movable bodies, and the
/// parameters driving them. Bodies only ever resolve against obstacles,
/// never against each other, so the order bodies are stored in cannot
/// affect the outcome of a frame.
pub struct World {
    obstacles: Vec<Obstacle>,
    bodies: Vec<Body>,
    config: WorldConfig,
}

impl World {
    pub fn new(config: WorldConfig) -> Self {
        Self {
            obstacles: Vec::new(),
            bodies: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Add a static obstacle. Only call between frames — obstacles are
    /// immutable for the lifetime of a frame.
    pub fn spawn_obstacle(&mut self, obstacle: Obstacle) -> ObstacleId {
        let id = ObstacleId(self.obstacles.len() as u32);
        self.obstacles.push(obstacle);
        id
    }

    /// Add a movable body.
    pub fn spawn_body(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(body);
        id
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0 as usize)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.0 as usize)
    }

    pub fn obstacle(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.get(id.0 as usize)
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Advance the whole world by one frame: every body is swept,
    /// integrated and resolved against the obstacle set, sequentially
    /// and independently. Obstacles are untouched.
    pub fn advance(&mut self) {
        let Self {
            obstacles,
            bodies,
            config,
        } = self;
        for body in bodies.iter_mut() {
            sweep::advance_body(body, obstacles, config);
        }
    }
}

/// True if the rectangle overlaps any obstacle in the set.
pub(crate) fn hits_any(aabb: &Aabb, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| aabb.overlaps(&o.aabb))
}

/// One integration substep for one body at fractional time scale `dt`.
///
/// Axis-separated: the vertical component moves and resolves first,
/// then the horizontal one. The ordering is a fixed tie-break — it
/// decides behavior at inside corners and is preserved as-is, known
/// corner cases included. On contact the moved axis rolls back to the
/// substep's start position and its velocity is zeroed; there is no
/// snap-to-surface.
///
/// Returns whether this substep hit anything; callers OR the results
/// across a frame's substeps.
pub(crate) fn integrate_substep(
    body: &mut Body,
    obstacles: &[Obstacle],
    gravity: glam::Vec2,
    dt: f32,
) -> bool {
    body.prev_pos = body.aabb.pos;

    let mut hit = false;

    body.velocity += gravity * dt;

    body.aabb.pos.y += body.velocity.y * dt;
    if hits_any(&body.aabb, obstacles) {
        hit = true;
        body.aabb.pos.y = body.prev_pos.y;
        body.velocity.y = 0.0;
    }

    body.aabb.pos.x += body.velocity.x * dt;
    if hits_any(&body.aabb, obstacles) {
        hit = true;
        body.aabb.pos.x = body.prev_pos.x;
        body.velocity.x = 0.0;
    }

    hit
}
