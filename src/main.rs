//! Ice Fisher entry point
//!
//! Headless demo driver: plays one round with a simple autoplay policy and
//! records the result to the on-disk progression store. Useful for watching
//! the sim behave and for soak-testing determinism from the command line.
//!
//! Usage: `ice-fisher [--realtime] [level 1-5] [seed]`

use std::path::PathBuf;
use std::time::{Duration, Instant};

use glam::Vec2;

use ice_fisher::consts::*;
use ice_fisher::sim::{GameRound, RoundResult};
use ice_fisher::{Progression, TickInput};

fn progression_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".ice_fisher_progress.json")
}

/// Cast at whichever fish will be nearest the hole once the hook is down,
/// leading the swim by the drop duration. Off-target fish are left alone;
/// waiting for a closer pass beats wasting a traversal.
fn autoplay_input(round: &GameRound) -> TickInput {
    if round.hook.is_active() {
        return TickInput::default();
    }

    let predicted_miss = |fish: &ice_fisher::sim::Fish| {
        (fish.pos.x + fish.speed * fish.direction * HOOK_DROP_SECS - HOLE_X).abs()
    };

    let target = round.fish.iter().min_by(|a, b| {
        predicted_miss(a)
            .partial_cmp(&predicted_miss(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    match target {
        Some(fish) if predicted_miss(fish) < HOOK_REACH + fish.size / 2.0 => TickInput {
            cast: Some(Vec2::new(HOLE_X, fish.pos.y)),
            pause: false,
        },
        _ => TickInput::default(),
    }
}

/// Fast-forward the round at fixed timestep until it emits its result
fn run_headless(round: &mut GameRound) -> RoundResult {
    let mut last_display = round.time_left_seconds();
    loop {
        let input = autoplay_input(round);
        if let Some(result) = round.tick(&input, SIM_DT) {
            return result;
        }
        let display = round.time_left_seconds();
        if display != last_display && display % 10 == 0 {
            log::info!(
                "{} left, {}/{} fish",
                round.clock.format_clock(),
                round.round.caught_fish,
                round.level.target_catch
            );
        }
        last_display = display;
    }
}

/// Run the round in real time with a fixed-timestep accumulator, the way a
/// rendering host would drive it
fn run_realtime(round: &mut GameRound) -> RoundResult {
    let mut last = Instant::now();
    let mut accumulator = 0.0f32;
    loop {
        let now = Instant::now();
        let dt = (now - last).as_secs_f32().min(0.1);
        last = now;
        accumulator += dt;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = autoplay_input(round);
            if let Some(result) = round.tick(&input, SIM_DT) {
                return result;
            }
            accumulator -= SIM_DT;
            substeps += 1;
        }

        std::thread::sleep(Duration::from_millis(4));
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut realtime = false;
    let mut positional: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--realtime" => realtime = true,
            "--help" | "-h" => {
                println!("Usage: ice-fisher [--realtime] [level 1-5] [seed]");
                return;
            }
            other => positional.push(other.to_string()),
        }
    }

    let requested_level: usize = positional
        .first()
        .and_then(|s| s.parse::<usize>().ok())
        .map(|n| n.saturating_sub(1))
        .unwrap_or(0);
    let seed: u64 = positional
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });

    let path = progression_path();
    let mut progression = Progression::load(&path);

    let level_index = if requested_level > progression.max_unlocked_level() {
        log::warn!(
            "level {} is locked, playing level {} instead",
            requested_level + 1,
            progression.max_unlocked_level() + 1
        );
        progression.max_unlocked_level()
    } else {
        requested_level
    };

    let mut round = GameRound::new(level_index, seed);
    let target = round.level.target_catch;

    let result = if realtime {
        run_realtime(&mut round)
    } else {
        run_headless(&mut round)
    };

    println!(
        "Level {} {}: {}/{} fish caught, {} on the clock (seed {seed})",
        level_index + 1,
        if result.passed { "PASSED" } else { "FAILED" },
        result.caught_fish,
        target,
        round.clock.format_clock(),
    );

    let best_before = progression.best_score(level_index);
    progression.record_result(&result);
    if result.caught_fish > best_before {
        println!("New best score for level {}!", level_index + 1);
    }
    if let Err(err) = progression.save(&path) {
        log::error!("failed to save progression: {err}");
    }
}
