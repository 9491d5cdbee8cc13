//! Audio collaborator: background soundtrack decoupled from gameplay.
//!
//! # Invariants
//! - Playback starts on the first input event, never before.
//! - Pause and resume follow the session's pause toggle in lockstep.
//! - A failing backend can never affect gameplay: sink errors are logged
//!   and swallowed.
//!
//! # Workaround
//! Ships a no-op backend behind the `AudioSink` trait as a stand-in for a
//! real playback backend (e.g. rodio). Consumers only see the trait.

mod soundtrack;

pub use soundtrack::{AudioError, AudioSink, NullAudio, Soundtrack};

pub fn crate_info() -> &'static str {
    "caravan-audio v0.1.0"
}
