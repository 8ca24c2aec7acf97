//! Per-actor simulation tick
//!
//! Orchestrates one elapsed-minutes step: body health feeds the
//! processor, processor output feeds the effect registry, resource
//! handlers turn empty tanks into effects, frostbite chews on its
//! target parts, and death is detected last. One cycle per tick; the
//! capacity feedback is consumed by next tick's rolls.

use rand::Rng;

use crate::body::capacity::Capacity;
use crate::effects::catalog;
use crate::effects::effect::{Effect, EffectKind};
use crate::simulation::actor::Actor;
use crate::survival::constants::{
    DEATH_TEMP_HIGH, DEATH_TEMP_LOW, FROSTBITE_DAMAGE_PER_HOUR,
};
use crate::survival::processor;
use crate::survival::result::SurvivalResult;

/// Events generated during an actor tick, for collaborators that want
/// structure rather than display strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ActorEvent {
    EffectGained { kind: EffectKind, severity: f32 },
    EffectEnded { kind: EffectKind },
    PartDestroyed { part: String },
    Died { cause: String },
}

/// Everything one tick produced
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    pub events: Vec<ActorEvent>,
    pub messages: Vec<String>,
}

/// Advance a waking actor by `minutes`
pub fn tick(actor: &mut Actor, minutes: f32, rng: &mut impl Rng) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if !actor.alive || minutes <= 0.0 {
        return outcome;
    }

    actor.survival.health_percent = actor.body.overall_health();
    let active = actor.effects.active().to_vec();
    let result = processor::process(&actor.survival, minutes, &active, rng);
    let generated = result.effects.clone();
    adopt(actor, result, &mut outcome);
    sweep_lapsed_temperature_effects(actor, &generated, &mut outcome);

    resource_handlers(actor, &mut outcome);
    frostbite_damage(actor, minutes, &mut outcome);
    registry_update(actor, minutes, &mut outcome);
    death_check(actor, &mut outcome);
    outcome
}

/// Advance a sleeping actor by `minutes`. No threshold effects are
/// generated, but existing effects still decay and resources still
/// bottom out.
pub fn sleep_tick(actor: &mut Actor, minutes: f32) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if !actor.alive || minutes <= 0.0 {
        return outcome;
    }

    actor.survival.health_percent = actor.body.overall_health();
    let result = processor::sleep(&actor.survival, minutes);
    adopt(actor, result, &mut outcome);

    resource_handlers(actor, &mut outcome);
    frostbite_damage(actor, minutes, &mut outcome);
    registry_update(actor, minutes, &mut outcome);
    death_check(actor, &mut outcome);
    outcome
}

// Take the processor's result: new data, generated effects into the
// registry, messages through.
fn adopt(actor: &mut Actor, result: SurvivalResult, outcome: &mut TickOutcome) {
    actor.survival = result.data;
    outcome.messages.extend(result.messages);
    for effect in result.effects {
        let was_active = actor
            .effects
            .active()
            .iter()
            .any(|a| a.same_instance(&effect));
        let kind = effect.kind.clone();
        let severity = effect.severity;
        outcome.messages.extend(actor.effects.add(effect));
        if !was_active {
            outcome.events.push(ActorEvent::EffectGained { kind, severity });
        }
    }
}

// Temperature effects carry no severity drift of their own: the
// processor replaces them every waking evaluation, and once it stops
// generating one the condition has passed and it ends here. Sleeping
// actors skip this sweep along with generation.
fn sweep_lapsed_temperature_effects(
    actor: &mut Actor,
    generated: &[Effect],
    outcome: &mut TickOutcome,
) {
    const TEMPERATURE_KINDS: [EffectKind; 6] = [
        EffectKind::Shivering,
        EffectKind::Hypothermia,
        EffectKind::SevereHypothermia,
        EffectKind::Frostbite,
        EffectKind::Sweating,
        EffectKind::Hyperthermia,
    ];
    for kind in TEMPERATURE_KINDS {
        if !actor.effects.is_active(&kind) {
            continue;
        }
        if generated.iter().any(|g| g.kind == kind) {
            continue;
        }
        outcome.messages.extend(actor.effects.remove(&kind));
        outcome.events.push(ActorEvent::EffectEnded { kind });
    }
}

// Empty tanks become effects; refilled tanks clear them. The processor
// floors the tanks and leaves this to its caller.
fn resource_handlers(actor: &mut Actor, outcome: &mut TickOutcome) {
    let starving = actor.survival.calories <= 0.0;
    let parched = actor.survival.hydration <= 0.0;
    handle_deficit(actor, outcome, starving, EffectKind::Starvation, catalog::starvation);
    handle_deficit(actor, outcome, parched, EffectKind::Dehydration, catalog::dehydration);
    // Hysteresis: exhaustion lifts only once a real rest is banked
    let exhausted = actor.survival.energy <= 0.0;
    let rested = actor.survival.energy >= 60.0;
    if exhausted {
        handle_deficit(actor, outcome, true, EffectKind::Exhaustion, catalog::exhaustion);
    } else if rested {
        handle_deficit(actor, outcome, false, EffectKind::Exhaustion, catalog::exhaustion);
    }
}

fn handle_deficit(
    actor: &mut Actor,
    outcome: &mut TickOutcome,
    in_deficit: bool,
    kind: EffectKind,
    make: fn() -> Effect,
) {
    if in_deficit {
        if !actor.effects.is_active(&kind) {
            let effect = make();
            let severity = effect.severity;
            outcome.messages.extend(actor.effects.add(effect));
            outcome
                .events
                .push(ActorEvent::EffectGained { kind, severity });
        }
    } else if actor.effects.is_active(&kind) {
        outcome.messages.extend(actor.effects.remove(&kind));
        outcome.events.push(ActorEvent::EffectEnded { kind });
    }
}

// Active frostbite slowly destroys its extremity
fn frostbite_damage(actor: &mut Actor, minutes: f32, outcome: &mut TickOutcome) {
    let targets: Vec<(String, f32)> = actor
        .effects
        .active()
        .iter()
        .filter(|e| e.kind == EffectKind::Frostbite)
        .filter_map(|e| e.target_part.clone().map(|p| (p, e.severity)))
        .collect();
    for (part, severity) in targets {
        let amount = FROSTBITE_DAMAGE_PER_HOUR * severity * minutes / 60.0;
        let id = actor.body.find_part(&part);
        let was_destroyed = id.map(|i| actor.body.part(i).destroyed).unwrap_or(true);
        outcome
            .messages
            .extend(actor.body.damage_environmental(&part, amount));
        if let Some(i) = id {
            if !was_destroyed && actor.body.part(i).destroyed {
                outcome.events.push(ActorEvent::PartDestroyed { part });
            }
        }
    }
}

fn registry_update(actor: &mut Actor, minutes: f32, outcome: &mut TickOutcome) {
    let before: Vec<EffectKind> = actor
        .effects
        .active()
        .iter()
        .map(|e| e.kind.clone())
        .collect();
    outcome.messages.extend(actor.effects.update(minutes));
    for kind in before {
        if !actor.effects.is_active(&kind) {
            outcome.events.push(ActorEvent::EffectEnded { kind });
        }
    }
}

fn death_check(actor: &mut Actor, outcome: &mut TickOutcome) {
    if !actor.alive {
        return;
    }
    let cause = if actor.body.is_destroyed() {
        Some("succumbed to injuries")
    } else if actor.body.capacity(Capacity::BloodPumping) <= 0.0 {
        Some("heart failure")
    } else if actor.body.capacity(Capacity::Consciousness) <= 0.0 {
        Some("brain death")
    } else if actor.survival.temperature <= DEATH_TEMP_LOW {
        Some("froze to death")
    } else if actor.survival.temperature >= DEATH_TEMP_HIGH {
        Some("died of heat stroke")
    } else {
        None
    };
    if let Some(cause) = cause {
        actor.alive = false;
        tracing::debug!(actor = %actor.name, cause, "actor died");
        outcome.messages.push(format!("{} has died: {}", actor.name, cause));
        outcome.events.push(ActorEvent::Died {
            cause: cause.to_string(),
        });
    }
}
