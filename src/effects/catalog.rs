//! Standard effect constructors
//!
//! Each builtin kind has one constructor that fixes its stacking policy,
//! capacity modifiers, per-minute stats and messages. Severity is passed
//! in by the caller (the survival processor computes it from thresholds,
//! the actor handlers from resource deficits).

use crate::body::capacity::Capacity;
use crate::effects::effect::{Effect, EffectKind, StackPolicy};
use crate::survival::constants::*;
use crate::survival::data::SurvivalDelta;

/// Cold-side threshold severity: deeper below the threshold is worse
pub fn cold_severity(temperature: f32, threshold: f32, range: f32) -> f32 {
    ((threshold - temperature) / range).clamp(MIN_EFFECT_SEVERITY, 1.0)
}

/// Hot-side threshold severity: further above the threshold is worse
pub fn hot_severity(temperature: f32, threshold: f32, range: f32) -> f32 {
    ((temperature - threshold) / range).clamp(MIN_EFFECT_SEVERITY, 1.0)
}

pub fn shivering(severity: f32) -> Effect {
    let mut effect = Effect::new(EffectKind::Shivering, severity);
    effect.capacity_mods = vec![(Capacity::Manipulation, -0.2)];
    // Shivering burns calories to generate heat
    effect.stats = SurvivalDelta {
        calories: -1.0,
        temperature: 0.002,
        ..SurvivalDelta::ZERO
    };
    effect.apply_message = Some("You are shivering uncontrollably".into());
    effect.remove_message = Some("You stop shivering".into());
    effect
}

pub fn hypothermia(severity: f32) -> Effect {
    let mut effect = Effect::new(EffectKind::Hypothermia, severity);
    effect.capacity_mods = vec![(Capacity::Consciousness, -0.3), (Capacity::Moving, -0.2)];
    effect.stats = SurvivalDelta {
        energy: -0.5,
        ..SurvivalDelta::ZERO
    };
    effect.apply_message = Some("Hypothermia is setting in".into());
    effect.remove_message = Some("You no longer feel dangerously cold".into());
    effect
}

pub fn severe_hypothermia(severity: f32) -> Effect {
    let mut effect = Effect::new(EffectKind::SevereHypothermia, severity);
    effect.capacity_mods = vec![
        (Capacity::Consciousness, -0.6),
        (Capacity::Moving, -0.5),
        (Capacity::Manipulation, -0.4),
    ];
    effect.stats = SurvivalDelta {
        energy: -1.0,
        ..SurvivalDelta::ZERO
    };
    effect.apply_message = Some("You are dangerously hypothermic and can barely move".into());
    effect.remove_message = Some("The deep cold releases its grip".into());
    effect
}

pub fn frostbite(severity: f32, part_name: &str) -> Effect {
    let mut effect = Effect::new(EffectKind::Frostbite, severity);
    effect.target_part = Some(part_name.to_string());
    effect.allow_multiple = true;
    // Hands lose dexterity, feet lose gait
    let capacity = if part_name.contains("Hand") {
        Capacity::Manipulation
    } else {
        Capacity::Moving
    };
    effect.capacity_mods = vec![(capacity, -0.15)];
    effect.apply_message = Some(format!("Frostbite is gnawing at your {part_name}"));
    effect.remove_message = Some(format!("Feeling returns to your {part_name}"));
    effect
}

pub fn sweating(severity: f32) -> Effect {
    let mut effect = Effect::new(EffectKind::Sweating, severity);
    effect.stats = SurvivalDelta {
        hydration: -0.15,
        temperature: -0.002,
        ..SurvivalDelta::ZERO
    };
    effect.apply_message = Some("You are drenched in sweat".into());
    effect.remove_message = Some("You stop sweating".into());
    effect
}

pub fn hyperthermia(severity: f32) -> Effect {
    let mut effect = Effect::new(EffectKind::Hyperthermia, severity);
    effect.capacity_mods = vec![(Capacity::Consciousness, -0.3)];
    effect.stats = SurvivalDelta {
        hydration: -0.1,
        energy: -0.5,
        ..SurvivalDelta::ZERO
    };
    effect.apply_message = Some("Heat stroke is setting in".into());
    effect.remove_message = Some("You no longer feel dangerously hot".into());
    effect
}

/// Grows for as long as the actor is out of calories; the actor tick
/// removes it when food arrives, so it stacks KeepMax.
pub fn starvation() -> Effect {
    let mut effect = Effect::new(EffectKind::Starvation, 0.05);
    effect.stack_policy = StackPolicy::KeepMax;
    effect.capacity_mods = vec![(Capacity::Moving, -0.3), (Capacity::Consciousness, -0.2)];
    effect.stats = SurvivalDelta {
        energy: -0.3,
        ..SurvivalDelta::ZERO
    };
    effect.hourly_severity_change = 0.05;
    effect.apply_message = Some("You are starving".into());
    effect.remove_message = Some("Your stomach is no longer empty".into());
    effect
}

pub fn dehydration() -> Effect {
    let mut effect = Effect::new(EffectKind::Dehydration, 0.05);
    effect.stack_policy = StackPolicy::KeepMax;
    effect.capacity_mods = vec![(Capacity::Consciousness, -0.3), (Capacity::Moving, -0.2)];
    effect.stats = SurvivalDelta {
        energy: -0.2,
        ..SurvivalDelta::ZERO
    };
    effect.hourly_severity_change = 0.08;
    effect.apply_message = Some("You are dehydrated".into());
    effect.remove_message = Some("Your thirst recedes".into());
    effect
}

pub fn exhaustion() -> Effect {
    let mut effect = Effect::new(EffectKind::Exhaustion, 0.05);
    effect.stack_policy = StackPolicy::KeepMax;
    effect.capacity_mods = vec![
        (Capacity::Consciousness, -0.4),
        (Capacity::Moving, -0.2),
        (Capacity::Manipulation, -0.2),
    ];
    effect.hourly_severity_change = 0.1;
    effect.apply_message = Some("You can barely keep your eyes open".into());
    effect.remove_message = Some("You feel rested".into());
    effect
}

/// External effect: combat collaborators add this on deep cuts.
/// Clots on its own over time.
pub fn bleeding(severity: f32, part_name: &str) -> Effect {
    let mut effect = Effect::new(EffectKind::Bleeding, severity);
    effect.stack_policy = StackPolicy::KeepMax;
    effect.target_part = Some(part_name.to_string());
    effect.allow_multiple = true;
    effect.stats = SurvivalDelta {
        energy: -0.2,
        ..SurvivalDelta::ZERO
    };
    effect.hourly_severity_change = -0.2;
    effect.apply_message = Some(format!("Your {part_name} is bleeding"));
    effect.remove_message = Some(format!("The bleeding from your {part_name} stops"));
    effect
}
