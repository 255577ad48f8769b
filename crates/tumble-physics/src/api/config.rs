use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Simulation parameters for a `World`.
/// Passed to the world constructor — there is no global mutable state.
/// Loaded from a JSON string by embedders that keep tuning data on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Gravity applied uniformly to every body, in units per frame².
    /// Y-down coordinates: positive Y pulls bodies downward.
    #[serde(default = "default_gravity")]
    pub gravity: Vec2,
    /// Baseline number of integration substeps per frame (minimum 1).
    /// The sweep controller multiplies this when sweeping is enabled.
    #[serde(default = "default_steps")]
    pub steps_per_frame: u32,
    /// Whether to subdivide fast motion so bodies cannot tunnel through
    /// thin obstacles. Disable only for A/B comparisons and tests.
    #[serde(default = "default_sweep")]
    pub sweep: bool,
}

fn default_gravity() -> Vec2 {
    Vec2::new(0.0, 1.0)
}

fn default_steps() -> u32 {
    1
}

fn default_sweep() -> bool {
    true
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            steps_per_frame: default_steps(),
            sweep: default_sweep(),
        }
    }
}

impl WorldConfig {
    /// Parse a config from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Tuning for the jump/walk controller layered on top of a body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Walk speed in units per frame while exactly one of left/right is held.
    #[serde(default = "default_horizontal_speed")]
    pub horizontal_speed: f32,
    /// Vertical velocity forced while actively jumping.
    /// Negative is upward in Y-down coordinates.
    #[serde(default = "default_jump_velocity")]
    pub jump_velocity: f32,
    /// Ballistic cutoff: after this many frames the jump ends even if
    /// the button is still held, capping jump height.
    #[serde(default = "default_max_jump_frames")]
    pub max_jump_frames: u32,
}

fn default_horizontal_speed() -> f32 {
    1.0
}

fn default_jump_velocity() -> f32 {
    -3.0
}

fn default_max_jump_frames() -> u32 {
    10
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            horizontal_speed: default_horizontal_speed(),
            jump_velocity: default_jump_velocity(),
            max_jump_frames: default_max_jump_frames(),
        }
    }
}

impl ControllerConfig {
    /// Parse a config from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
