use serde::{Deserialize, Serialize};
use std::path::Path;

/// Gameplay tuning constants.
///
/// All rates are expressed in units per frame, not per second. The
/// simulation is frame-coupled, so the apparent speed scales with how fast
/// the driver ticks it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Distance the player advances down -z each active frame.
    pub forward_speed: f32,
    /// Lateral step applied per steer input. No track-width clamp exists.
    pub strafe_step: f32,
    /// An obstacle spawns every this many active frames.
    pub spawn_interval: u64,
    /// Spawn x is drawn uniformly from [-spawn_half_width, spawn_half_width).
    pub spawn_half_width: f32,
    /// Spawn y for every obstacle.
    pub spawn_height: f32,
    /// Spawn z in absolute world coordinates, not relative to the player:
    /// as the player advances, the spawn-to-player gap at spawn time
    /// shrinks. Kept as-is rather than silently changed to a relative spawn.
    pub spawn_z: f32,
    /// Collision fires when any obstacle comes within this distance of the
    /// player, measured over the full 3D position (y included).
    pub collision_radius: f32,
    /// Obstacles with z beyond player.z + retire_margin are despawned,
    /// keeping the registry bounded over long runs.
    pub retire_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            forward_speed: 0.4,
            strafe_step: 0.6,
            spawn_interval: 120,
            spawn_half_width: 3.0,
            spawn_height: 1.0,
            spawn_z: -60.0,
            collision_radius: 1.5,
            retire_margin: 15.0,
        }
    }
}

/// Errors from loading or validating tuning.
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

impl Tuning {
    /// Load tuning from a YAML file. Missing fields fall back to defaults.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let text = std::fs::read_to_string(path)?;
        let tuning: Tuning = serde_yaml::from_str(&text)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the update loop cannot make sense of.
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.forward_speed <= 0.0 {
            return Err(TuningError::Invalid("forward_speed must be positive"));
        }
        if self.spawn_interval == 0 {
            return Err(TuningError::Invalid("spawn_interval must be nonzero"));
        }
        if self.collision_radius <= 0.0 {
            return Err(TuningError::Invalid("collision_radius must be positive"));
        }
        if self.retire_margin <= 0.0 {
            return Err(TuningError::Invalid("retire_margin must be positive"));
        }
        Ok(())
    }
}
