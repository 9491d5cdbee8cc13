use caravan_common::ObstacleId;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A spawned obstacle. Identity is the insertion-order id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub position: Vec3,
}

/// Ordered collection of live obstacles.
///
/// Iteration order is spawn order, which the collision scan relies on: the
/// earliest-spawned obstacle inside the radius is the one reported.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleRegistry {
    obstacles: Vec<Obstacle>,
    next_id: u64,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    /// Append a new obstacle at the given position. Returns its id.
    pub fn spawn(&mut self, position: Vec3) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        self.obstacles.push(Obstacle { id, position });
        id
    }

    /// Scroll every obstacle toward the player by dz. One uniform pass over
    /// the whole registry per tick.
    pub fn advance(&mut self, dz: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.position.z += dz;
        }
    }

    /// First obstacle (in spawn order) whose full 3D distance to `center` is
    /// under `radius`. The y component participates even though player and
    /// obstacles nominally sit on fixed heights.
    pub fn first_within(&self, center: Vec3, radius: f32) -> Option<ObstacleId> {
        self.obstacles
            .iter()
            .find(|o| o.position.distance(center) < radius)
            .map(|o| o.id)
    }

    /// Remove obstacles that have scrolled past `z_limit` (behind the
    /// camera). Returns the retired ids in spawn order.
    pub fn retire_behind(&mut self, z_limit: f32) -> Vec<ObstacleId> {
        let mut retired = Vec::new();
        self.obstacles.retain(|o| {
            if o.position.z > z_limit {
                retired.push(o.id);
                false
            } else {
                true
            }
        });
        retired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_assigns_sequential_ids() {
        let mut reg = ObstacleRegistry::new();
        let a = reg.spawn(Vec3::new(0.0, 1.0, -60.0));
        let b = reg.spawn(Vec3::new(1.0, 1.0, -60.0));
        assert_eq!(a, ObstacleId(0));
        assert_eq!(b, ObstacleId(1));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn advance_moves_every_obstacle_by_exactly_dz() {
        let mut reg = ObstacleRegistry::new();
        reg.spawn(Vec3::new(0.0, 1.0, -60.0));
        reg.spawn(Vec3::new(2.0, 1.0, -30.0));
        reg.advance(0.4);
        let zs: Vec<f32> = reg.iter().map(|o| o.position.z).collect();
        assert_eq!(zs, vec![-59.6, -29.6]);
    }

    #[test]
    fn first_within_prefers_spawn_order() {
        let mut reg = ObstacleRegistry::new();
        let near_a = reg.spawn(Vec3::new(0.5, 0.0, 0.0));
        let _near_b = reg.spawn(Vec3::new(-0.5, 0.0, 0.0));
        let hit = reg.first_within(Vec3::ZERO, 1.5);
        assert_eq!(hit, Some(near_a));
    }

    #[test]
    fn distance_check_includes_y() {
        let mut reg = ObstacleRegistry::new();
        // 1.4 laterally but lifted 1.0: 3D distance ~1.72, outside radius.
        reg.spawn(Vec3::new(1.4, 1.0, 0.0));
        assert_eq!(reg.first_within(Vec3::ZERO, 1.5), None);
        assert!(reg.first_within(Vec3::ZERO, 1.8).is_some());
    }

    #[test]
    fn boundary_distance_does_not_collide() {
        let mut reg = ObstacleRegistry::new();
        reg.spawn(Vec3::new(1.5, 0.0, 0.0));
        // Strict less-than: exactly the radius is a miss.
        assert_eq!(reg.first_within(Vec3::ZERO, 1.5), None);
    }

    #[test]
    fn retire_behind_removes_only_passed_obstacles() {
        let mut reg = ObstacleRegistry::new();
        let passed = reg.spawn(Vec3::new(0.0, 1.0, 20.0));
        let ahead = reg.spawn(Vec3::new(0.0, 1.0, -40.0));
        let retired = reg.retire_behind(15.0);
        assert_eq!(retired, vec![passed]);
        assert_eq!(reg.len(), 1);
        assert!(reg.get(ahead).is_some());
        assert!(reg.get(passed).is_none());
    }

    #[test]
    fn ids_are_not_reused_after_retirement() {
        let mut reg = ObstacleRegistry::new();
        reg.spawn(Vec3::new(0.0, 1.0, 20.0));
        reg.retire_behind(0.0);
        let next = reg.spawn(Vec3::new(0.0, 1.0, -60.0));
        assert_eq!(next, ObstacleId(1));
    }
}
