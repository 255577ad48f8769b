pub mod api;
pub mod components;
pub mod core;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{ControllerConfig, WorldConfig};
pub use api::types::{BodyId, ObstacleId};
pub use components::body::Body;
pub use components::obstacle::Obstacle;
pub use core::math::Aabb;
pub use core::sweep::FINE_SWEEP_UNIT;
pub use core::world::World;
pub use input::snapshot::{ButtonTracker, InputState};
pub use systems::controller::{JumpController, JumpState};
