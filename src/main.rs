//! Frostmarch - Entry Point
//!
//! Headless exposure scenario: one actor, a fixed environment, hourly
//! ticks. Prints the survival message log; optionally dumps the final
//! actor state as JSON.

use clap::Parser;
use frostmarch::body::factory::{BodyCreationInfo, BodyPlan};
use frostmarch::core::error::Result;
use frostmarch::simulation::actor::Actor;
use frostmarch::simulation::tick::{sleep_tick, tick};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Survival exposure scenario runner
#[derive(Parser, Debug)]
#[command(name = "frostmarch")]
#[command(about = "Run a survival exposure scenario and print the message log")]
struct Args {
    /// Body plan for the actor
    #[arg(long, default_value = "humanoid")]
    plan: BodyPlan,

    /// Hours to simulate
    #[arg(long, default_value_t = 24)]
    hours: u32,

    /// Environmental temperature, degrees Fahrenheit
    #[arg(long, default_value_t = 32.0)]
    environment: f32,

    /// Worn equipment insulation, 0.0-0.95
    #[arg(long, default_value_t = 0.3)]
    insulation: f32,

    /// Hour of day (0-23) at which the actor tries to sleep, 8 hours
    #[arg(long, default_value_t = 22)]
    bedtime: u32,

    /// Random seed for deterministic runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Dump final actor state as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frostmarch=info".into()),
        )
        .init();

    let args = Args::parse();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut info = BodyCreationInfo::humanoid(80.0, 20.0, 42.0);
    info.plan = args.plan;
    let mut actor = Actor::new("Wanderer", &info)?;
    actor.survival.is_player = true;
    actor.survival.environment_temp = args.environment;
    actor.survival.equipment_insulation = args.insulation.clamp(0.0, 0.95);

    println!(
        "Exposure scenario: {}°F, insulation {:.2}, {} hours",
        args.environment, actor.survival.equipment_insulation, args.hours
    );

    for hour in 0..args.hours {
        let hour_of_day = hour % 24;
        let hours_since_bedtime = (hour_of_day + 24 - args.bedtime % 24) % 24;
        let sleeping = hours_since_bedtime < 8;
        let outcome = if sleeping {
            sleep_tick(&mut actor, 60.0)
        } else {
            tick(&mut actor, 60.0, &mut rng)
        };
        for message in &outcome.messages {
            println!("[hour {hour:>3}] {message}");
        }
        if !actor.alive {
            break;
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&actor)?);
    } else {
        println!("---");
        println!(
            "{}: {} | temp {:.1}°F | calories {:.0} | hydration {:.0} | energy {:.0} | health {:.0}%",
            actor.name,
            if actor.alive { "alive" } else { "dead" },
            actor.survival.temperature,
            actor.survival.calories,
            actor.survival.hydration,
            actor.survival.energy,
            actor.body.overall_health() * 100.0
        );
        for effect in actor.effects.active() {
            println!(
                "  {} (severity {:.2}{})",
                effect.kind,
                effect.severity,
                effect
                    .target_part
                    .as_deref()
                    .map(|p| format!(", {p}"))
                    .unwrap_or_default()
            );
        }
    }
    Ok(())
}
