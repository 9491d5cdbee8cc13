use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The controlled character. Starts at the world origin and advances down -z
/// every active frame for as long as the session lives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec3,
}

impl Player {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
        }
    }

    /// Unconditional forward motion for one frame.
    pub fn advance(&mut self, speed: f32) {
        self.position.z -= speed;
    }

    /// Lateral dodge. There is no track-width clamp; the player may strafe
    /// off any implied lane.
    pub fn strafe(&mut self, dx: f32) {
        self.position.x += dx;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
