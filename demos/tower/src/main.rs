//! tower — headless run of the lift building simulator.
//!
//! Simulates a morning in a small office tower: a quiet first phase, then a
//! rush where arrivals pick up and the clock runs four times faster.  An
//! optional JSON file replaces the default configuration:
//!
//! ```text
//! RUST_LOG=debug cargo run -p tower -- tower.json
//! ```
//!
//! Missing fields in the file fall back to their defaults.

use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use lift_core::{Floor, SimConfig, Tick};
use lift_dispatch::NearestCarDispatcher;
use lift_sim::{GroupArrival, SimBuilder, SimObserver, SimStats};

// ── Constants ─────────────────────────────────────────────────────────────────

const QUIET_MS:             u64 = 60_000;
const RUSH_MS:              u64 = 60_000;
const RUSH_TIME_SCALE:      f64 = 4.0;
const RUSH_SPAWN_PROB:      f64 = 0.3;
const PROGRESS_EVERY_TICKS: u64 = 500;

// ── Observer ──────────────────────────────────────────────────────────────────

struct ProgressLogger {
    groups:  u64,
    largest: usize,
}

impl SimObserver for ProgressLogger {
    fn on_group_spawned(&mut self, tick: Tick, group: &GroupArrival) {
        self.groups += 1;
        self.largest = self.largest.max(group.size);
        log::debug!(
            "{tick}: {} waiting at {} for {}",
            group.size, group.origin, group.destination
        );
    }

    fn on_tick_end(&mut self, tick: Tick, stats: &SimStats) {
        if tick.0 > 0 && tick.0 % PROGRESS_EVERY_TICKS == 0 {
            info!(
                "{tick}: {} spawned, {} riding, {} delivered",
                stats.spawned,
                stats.riding(),
                stats.delivered
            );
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, stats: &SimStats) {
        info!("phase ended at {final_tick} with {} delivered", stats.delivered);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config() -> Result<SimConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config {path}"))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {path}"))?;
    info!("loaded configuration from {path}");
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    println!("=== tower — lift building simulator ===");
    println!(
        "Floors: {}  |  Cars: {}  |  Tick: {} ms  |  Seed: {}",
        config.floors, config.elevators, config.tick_period_ms, config.seed
    );
    println!();

    let mut sim = SimBuilder::new(config, NearestCarDispatcher).build()?;
    let mut obs = ProgressLogger { groups: 0, largest: 0 };

    let t0 = Instant::now();
    sim.run_for_ms(QUIET_MS, &mut obs)?;

    sim.set_time_scale(RUSH_TIME_SCALE)?;
    sim.set_spawn_probability(RUSH_SPAWN_PROB)?;
    info!("rush hour: ×{RUSH_TIME_SCALE}, spawn probability {RUSH_SPAWN_PROB}");
    sim.run_for_ms(RUSH_MS, &mut obs)?;
    let elapsed = t0.elapsed();

    // ── Summary ───────────────────────────────────────────────────────────
    let stats = sim.stats();
    println!("Simulated {} in {:.3} s", sim.clock(), elapsed.as_secs_f64());
    println!("  groups            : {} (largest {})", obs.groups, obs.largest);
    println!("  spawned           : {}", stats.spawned);
    println!("  boarded           : {}", stats.boarded);
    println!("  delivered         : {}", stats.delivered);
    println!("  still waiting     : {}", sim.floors().total_waiting());
    println!("  unanswered calls  : {}", stats.unanswered_calls);
    match stats.average_wait_secs() {
        Some(avg) => println!("  average wait      : {avg:.1} s"),
        None => println!("  average wait      : n/a"),
    }
    println!();

    println!("{:<8} {:<10} {:>8} {:>10} {:>8}", "Car", "Status", "Position", "Occupants", "Queued");
    println!("{}", "-".repeat(48));
    for car in sim.cars() {
        println!(
            "{:<8} {:<10} {:>8.2} {:>10} {:>8}",
            car.id().0,
            car.status().to_string(),
            car.position(),
            car.occupants().len(),
            car.destination_count(),
        );
    }
    println!();

    println!("{:<8} {:>8}", "Floor", "Waiting");
    println!("{}", "-".repeat(17));
    for f in 0..sim.floors().floor_count() {
        println!("{:<8} {:>8}", f, sim.waiting_count(Floor(f)));
    }

    Ok(())
}
