//! Rendering Adapter: renderer-agnostic interface over session state.
//!
//! # Invariants
//! - Renderers cannot mutate session truth; they read a snapshot.
//! - The camera derives entirely from the player position plus a fixed
//!   offset; it holds no independent state besides the viewport aspect.
//!
//! # Workaround
//! Ships a debug text renderer as a stand-in for a GPU backend. The trait is
//! stable; a real backend slots in without changing consumers.

mod camera;
mod renderer;

pub use camera::{CameraFollower, RenderView};
pub use renderer::{DebugTextRenderer, Renderer, SceneSnapshot};

pub fn crate_info() -> &'static str {
    "caravan-render v0.1.0"
}
