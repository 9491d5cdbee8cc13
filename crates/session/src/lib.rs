//! Session core: authoritative runner state and the per-tick update loop.
//!
//! # Invariants
//! - All state mutations flow through `Session` methods; there are no
//!   ambient globals, so a session can be discarded and rebuilt for restart.
//! - Given the same seed, tuning, and input sequence, a session is
//!   deterministic tick for tick.
//! - A paused tick mutates nothing, not even the frame counter.

pub mod player;
pub mod registry;
pub mod rng;
pub mod session;
pub mod tuning;

pub use player::Player;
pub use registry::{Obstacle, ObstacleRegistry};
pub use rng::SpawnRng;
pub use session::{EndReason, Session, Steer, TickOutcome, TickReport};
pub use tuning::{Tuning, TuningError};
