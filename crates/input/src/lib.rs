//! Input collaborator: discrete key events mapped to shared actions.
//!
//! # Invariants
//! - The session consumes actions, never raw key events.
//! - Unrecognized keys map to `Noop` and are silently ignored; there is no
//!   key-repeat handling and no simultaneous-key resolution.

pub mod action;

pub use action::Action;
