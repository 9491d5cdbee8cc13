use caravan_common::ObstacleId;
use glam::Vec3;

use crate::player::Player;
use crate::registry::ObstacleRegistry;
use crate::rng::SpawnRng;
use crate::tuning::Tuning;

/// The single terminal signal a session can produce.
///
/// There is deliberately no richer taxonomy: collision is the only way a
/// session ends, and the hosting environment responds by discarding the
/// session and building a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Collision,
}

/// Lateral steering input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
}

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Pause flag was set: nothing mutated, and the caller must also skip
    /// rendering (the loop short-circuits before the render call).
    Paused,
    /// A normal frame ran to completion.
    Advanced(TickReport),
    /// The session already ended on an earlier tick. Terminal and sticky.
    Ended(EndReason),
}

/// Per-frame record of spawn, retirement, and termination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub frame: u64,
    pub spawned: Option<ObstacleId>,
    pub retired: Vec<ObstacleId>,
    pub ended: Option<EndReason>,
}

/// One run of the game, from first frame to collision.
///
/// Owns every piece of mutable state the update loop touches: player,
/// obstacle registry, frame counter, pause flag, and the spawn RNG. Restart
/// rebuilds all of it from the seed and tuning, so nothing leaks across runs.
#[derive(Debug, Clone)]
pub struct Session {
    tuning: Tuning,
    player: Player,
    obstacles: ObstacleRegistry,
    rng: SpawnRng,
    seed: u64,
    frame: u64,
    paused: bool,
    ended: Option<EndReason>,
}

impl Session {
    /// Fresh session with default tuning: frame 0, running, empty registry.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            tuning,
            player: Player::new(),
            obstacles: ObstacleRegistry::new(),
            rng: SpawnRng::new(seed),
            seed,
            frame: 0,
            paused: false,
            ended: None,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn ended(&self) -> Option<EndReason> {
        self.ended
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &ObstacleRegistry {
        &self.obstacles
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Place an obstacle directly, bypassing the spawn cadence. Used by
    /// tooling and scenario tests to set up exact board states.
    pub fn spawn_at(&mut self, position: Vec3) -> ObstacleId {
        self.obstacles.spawn(position)
    }

    /// Apply a lateral steering input.
    ///
    /// Not gated by the pause flag: steering arrives through an event
    /// listener that sits outside the pause check, so the player can strafe
    /// while paused even though forward motion and spawning freeze.
    pub fn steer(&mut self, dir: Steer) {
        let dx = match dir {
            Steer::Left => -self.tuning.strafe_step,
            Steer::Right => self.tuning.strafe_step,
        };
        self.player.strafe(dx);
    }

    /// Flip the pause flag and return the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        tracing::debug!(paused = self.paused, "pause toggled");
        self.paused
    }

    /// Discard all run state and rebuild from seed + tuning. This is the
    /// whole game-over reset: nothing survives into the next run.
    pub fn restart(&mut self) {
        tracing::info!(seed = self.seed, "session restart");
        *self = Self::with_tuning(self.seed, self.tuning.clone());
    }

    /// Run one frame of the update loop.
    ///
    /// Order per active frame: advance the frame counter, move the player
    /// forward, spawn on cadence, scroll all obstacles, scan for collision,
    /// retire passed obstacles. A paused tick does none of it.
    pub fn tick(&mut self) -> TickOutcome {
        if self.paused {
            return TickOutcome::Paused;
        }
        if let Some(reason) = self.ended {
            return TickOutcome::Ended(reason);
        }
        let _span = tracing::trace_span!("tick", frame = self.frame + 1).entered();

        self.frame += 1;
        self.player.advance(self.tuning.forward_speed);

        let mut report = TickReport {
            frame: self.frame,
            ..TickReport::default()
        };

        if self.frame % self.tuning.spawn_interval == 0 {
            let id = self.spawn_obstacle();
            report.spawned = Some(id);
        }

        self.obstacles.advance(self.tuning.forward_speed);

        if let Some(hit) = self
            .obstacles
            .first_within(self.player.position, self.tuning.collision_radius)
        {
            tracing::info!(%hit, frame = self.frame, "collision, session over");
            self.ended = Some(EndReason::Collision);
            report.ended = Some(EndReason::Collision);
            return TickOutcome::Advanced(report);
        }

        let z_limit = self.player.position.z + self.tuning.retire_margin;
        report.retired = self.obstacles.retire_behind(z_limit);
        if !report.retired.is_empty() {
            tracing::debug!(count = report.retired.len(), "retired passed obstacles");
        }

        TickOutcome::Advanced(report)
    }

    fn spawn_obstacle(&mut self) -> ObstacleId {
        // x uniform over [-half_width, half_width).
        let x = (self.rng.next_unit() - 0.5) * 2.0 * self.tuning.spawn_half_width;
        let position = Vec3::new(x, self.tuning.spawn_height, self.tuning.spawn_z);
        let id = self.obstacles.spawn(position);
        tracing::debug!(%id, x, frame = self.frame, "spawned obstacle");
        id
    }
}
