use glam::Vec3;

/// Camera/view configuration handed to renderers each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
}

/// Derives the camera from the player position plus a fixed offset.
///
/// Only z follows the player; x and y stay at the offset. The follower keeps
/// no state of its own except the viewport aspect, which the host pushes in
/// on resize.
#[derive(Debug, Clone, Copy)]
pub struct CameraFollower {
    offset: Vec3,
    fov_degrees: f32,
    aspect: f32,
}

impl CameraFollower {
    pub fn new() -> Self {
        Self {
            offset: Vec3::new(0.0, 6.0, 12.0),
            fov_degrees: 60.0,
            aspect: 16.0 / 9.0,
        }
    }

    /// Viewport resize passthrough. Nothing else in the core depends on
    /// viewport size.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
            tracing::debug!(width, height, aspect = self.aspect, "viewport resized");
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Build the view for the current player position. Holds the invariant
    /// `eye.z == player.z + 12` with the default offset.
    pub fn view(&self, player_position: Vec3) -> RenderView {
        RenderView {
            eye: Vec3::new(
                self.offset.x,
                self.offset.y,
                player_position.z + self.offset.z,
            ),
            target: player_position,
            fov_degrees: self.fov_degrees,
            aspect: self.aspect,
        }
    }
}

impl Default for CameraFollower {
    fn default() -> Self {
        Self::new()
    }
}
