/// Handle to a static obstacle in a `World`.
///
/// Obstacles are never removed during simulation, so the handle is a
/// plain index into the world's obstacle list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObstacleId(pub u32);

/// Handle to a movable body in a `World`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);
