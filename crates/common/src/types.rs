use serde::{Deserialize, Serialize};

/// Unique identifier for an obstacle in a session.
///
/// Ids are handed out sequentially, so they double as insertion order:
/// a lower id was spawned earlier. Ids are never reused within a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ObstacleId(pub u64);

impl std::fmt::Display for ObstacleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
