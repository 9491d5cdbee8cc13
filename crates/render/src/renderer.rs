use caravan_common::ObstacleId;
use caravan_session::Session;
use glam::Vec3;

use crate::camera::RenderView;

/// Positions captured from a session at the end of an active tick.
///
/// The core's contract with any renderer: positions are current before each
/// render call. Obstacles appear in spawn order.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    pub frame: u64,
    pub player: Vec3,
    pub obstacles: Vec<(ObstacleId, Vec3)>,
}

impl SceneSnapshot {
    pub fn capture(session: &Session) -> Self {
        Self {
            frame: session.frame(),
            player: session.player().position,
            obstacles: session
                .obstacles()
                .iter()
                .map(|o| (o.id, o.position))
                .collect(),
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads a snapshot and a view, then produces output. It never
/// mutates the session; session truth stays with the core.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given snapshot and view.
    fn render(&self, scene: &SceneSnapshot, view: &RenderView) -> Self::Output;
}

/// Debug text renderer, standing in for a GPU backend.
///
/// Produces a human-readable dump of the scene. Useful for CLI output,
/// logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &SceneSnapshot, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame {} ===\ncamel: ({:.2}, {:.2}, {:.2})\n",
            scene.frame, scene.player.x, scene.player.y, scene.player.z
        ));
        out.push_str(&format!(
            "camera: eye=({:.1}, {:.1}, {:.1}) aspect={:.2} fov={:.0}\n",
            view.eye.x, view.eye.y, view.eye.z, view.aspect, view.fov_degrees
        ));
        out.push_str(&format!("obstacles: {}\n", scene.obstacles.len()));
        for (id, p) in &scene.obstacles {
            out.push_str(&format!("  {id} pos=({:.2}, {:.2}, {:.2})\n", p.x, p.y, p.z));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraFollower;

    #[test]
    fn snapshot_captures_positions_in_spawn_order() {
        let mut session = Session::new(42);
        let a = session.spawn_at(Vec3::new(-1.0, 1.0, -60.0));
        let b = session.spawn_at(Vec3::new(1.0, 1.0, -50.0));
        let scene = SceneSnapshot::capture(&session);
        assert_eq!(scene.player, Vec3::ZERO);
        assert_eq!(scene.obstacles.len(), 2);
        assert_eq!(scene.obstacles[0].0, a);
        assert_eq!(scene.obstacles[1].0, b);
    }

    #[test]
    fn snapshot_tracks_tick_state() {
        let mut session = Session::new(42);
        session.tick();
        session.tick();
        let scene = SceneSnapshot::capture(&session);
        assert_eq!(scene.frame, 2);
        assert!((scene.player.z - (-0.8)).abs() < 1e-6);
    }

    #[test]
    fn debug_renderer_empty_scene() {
        let session = Session::new(42);
        let scene = SceneSnapshot::capture(&session);
        let view = CameraFollower::new().view(scene.player);
        let output = DebugTextRenderer::new().render(&scene, &view);
        assert!(output.contains("Frame 0"));
        assert!(output.contains("obstacles: 0"));
    }

    #[test]
    fn debug_renderer_lists_obstacles() {
        let mut session = Session::new(42);
        session.spawn_at(Vec3::new(0.5, 1.0, -60.0));
        let scene = SceneSnapshot::capture(&session);
        let view = CameraFollower::new().view(scene.player);
        let output = DebugTextRenderer::new().render(&scene, &view);
        assert!(output.contains("obstacles: 1"));
        assert!(output.contains("#0"));
    }
}
