//! Shared types for the caravan runner crates.

pub mod types;

pub use types::ObstacleId;
