use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use caravan_audio::{NullAudio, Soundtrack};
use caravan_input::Action;
use caravan_render::{CameraFollower, DebugTextRenderer, Renderer, SceneSnapshot};
use caravan_session::{Session, Steer, TickOutcome, Tuning};

#[derive(Parser)]
#[command(name = "caravan", about = "Headless driver for the caravan runner")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate info and the default tuning
    Info,
    /// Drive a session for a number of ticks
    Run {
        /// Number of ticks to drive
        #[arg(short, long, default_value = "600")]
        ticks: u64,
        /// Seed fixing the obstacle layout
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Optional tuning YAML file
        #[arg(long)]
        config: Option<String>,
        /// Scripted inputs as "tick:action" pairs, e.g. "30:left,60:right,90:pause"
        #[arg(long, default_value = "")]
        script: String,
        /// How many times to reinitialize after a collision before stopping
        #[arg(long, default_value = "0")]
        restarts: u32,
    },
}

/// Scripted input events, indexed by driver tick. External events arrive in
/// wall time, so the index keeps counting while the session is paused.
struct InputScript {
    events: Vec<(u64, Action)>,
}

impl InputScript {
    fn parse(text: &str) -> Result<Self> {
        let mut events = Vec::new();
        for entry in text.split(',').filter(|e| !e.trim().is_empty()) {
            let (tick, name) = entry
                .split_once(':')
                .with_context(|| format!("script entry {entry:?} is not tick:action"))?;
            let tick: u64 = tick
                .trim()
                .parse()
                .with_context(|| format!("bad tick in script entry {entry:?}"))?;
            let action = match name.trim() {
                "left" => Action::SteerLeft,
                "right" => Action::SteerRight,
                "pause" => Action::TogglePause,
                other => bail!("unknown script action {other:?}"),
            };
            events.push((tick, action));
        }
        events.sort_by_key(|(tick, _)| *tick);
        Ok(Self { events })
    }

    fn actions_at(&self, tick: u64) -> impl Iterator<Item = Action> + '_ {
        self.events
            .iter()
            .filter(move |(t, _)| *t == tick)
            .map(|(_, action)| *action)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("caravan-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", caravan_render::crate_info());
            println!("audio: {}", caravan_audio::crate_info());
            let tuning = Tuning::default();
            println!(
                "tuning: speed={} strafe={} spawn_every={} radius={}",
                tuning.forward_speed,
                tuning.strafe_step,
                tuning.spawn_interval,
                tuning.collision_radius
            );
        }
        Commands::Run {
            ticks,
            seed,
            config,
            script,
            restarts,
        } => {
            let tuning = match config {
                Some(path) => {
                    Tuning::from_yaml_file(&path).with_context(|| format!("loading {path}"))?
                }
                None => Tuning::default(),
            };
            let script = InputScript::parse(&script)?;
            run_session(ticks, seed, tuning, &script, restarts)?;
        }
    }

    Ok(())
}

fn run_session(
    ticks: u64,
    seed: u64,
    tuning: Tuning,
    script: &InputScript,
    mut restarts: u32,
) -> Result<()> {
    let mut session = Session::with_tuning(seed, tuning);
    let camera = CameraFollower::new();
    let renderer = DebugTextRenderer::new();
    let mut soundtrack = Soundtrack::new(NullAudio);

    tracing::info!(seed, ticks, "session start");

    for tick in 1..=ticks {
        for action in script.actions_at(tick) {
            soundtrack.on_input();
            match action {
                Action::SteerLeft => session.steer(Steer::Left),
                Action::SteerRight => session.steer(Steer::Right),
                Action::TogglePause => {
                    let paused = session.toggle_pause();
                    soundtrack.on_pause_changed(paused);
                }
                Action::Noop => {}
            }
        }

        match session.tick() {
            // Paused ticks skip rendering entirely.
            TickOutcome::Paused => {}
            TickOutcome::Advanced(report) => {
                let scene = SceneSnapshot::capture(&session);
                let view = camera.view(scene.player);
                tracing::debug!("\n{}", renderer.render(&scene, &view));

                if report.ended.is_some() {
                    println!("Game Over (frame {})", report.frame);
                    if restarts == 0 {
                        break;
                    }
                    restarts -= 1;
                    session.restart();
                }
            }
            TickOutcome::Ended(_) => break,
        }
    }

    tracing::info!(
        frame = session.frame(),
        obstacles = session.obstacle_count(),
        ended = session.ended().is_some(),
        "session stop"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_parses_sorted_events() {
        let script = InputScript::parse("60:right, 30:left ,90:pause").unwrap();
        let ticks: Vec<u64> = script.events.iter().map(|(t, _)| *t).collect();
        assert_eq!(ticks, vec![30, 60, 90]);
    }

    #[test]
    fn script_allows_multiple_actions_per_tick() {
        let script = InputScript::parse("10:left,10:left").unwrap();
        assert_eq!(script.actions_at(10).count(), 2);
        assert_eq!(script.actions_at(11).count(), 0);
    }

    #[test]
    fn empty_script_is_valid() {
        let script = InputScript::parse("").unwrap();
        assert!(script.events.is_empty());
    }

    #[test]
    fn malformed_entries_are_rejected() {
        assert!(InputScript::parse("banana").is_err());
        assert!(InputScript::parse("x:left").is_err());
        assert!(InputScript::parse("10:jump").is_err());
    }
}
