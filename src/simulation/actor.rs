//! An actor: one body, one physiology, one set of active effects

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::body::capacity::Capacity;
use crate::body::factory::BodyCreationInfo;
use crate::body::tree::{Body, DamageInfo, HealingInfo};
use crate::core::{ActorId, Result};
use crate::effects::registry::EffectRegistry;
use crate::survival::data::SurvivalData;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub body: Body,
    pub survival: SurvivalData,
    pub effects: EffectRegistry,
    pub alive: bool,
}

impl Actor {
    pub fn new(name: impl Into<String>, info: &BodyCreationInfo) -> Result<Self> {
        let body = info.build()?;
        let survival = SurvivalData::from_creation(info);
        Ok(Self {
            id: ActorId::new(),
            name: name.into(),
            body,
            survival,
            effects: EffectRegistry::new(),
            alive: true,
        })
    }

    /// Effective capacity: body-derived value plus the summed effect
    /// modifiers, clamped back to 0-1. This is the number combat and
    /// task rolls consume.
    pub fn capacity(&self, capacity: Capacity) -> f32 {
        let base = self.body.capacity(capacity);
        let modifier = self
            .effects
            .capacity_modifiers()
            .get(&capacity)
            .copied()
            .unwrap_or(0.0);
        (base + modifier).clamp(0.0, 1.0)
    }

    /// Apply collaborator damage to the body tree
    pub fn damage(&mut self, info: &DamageInfo, rng: &mut impl Rng) -> Vec<String> {
        if !self.alive {
            return Vec::new();
        }
        let messages = self.body.damage(info, rng);
        if self.body.is_destroyed() {
            self.alive = false;
        }
        messages
    }

    /// Apply collaborator healing to the body tree
    pub fn heal(&mut self, info: &HealingInfo, rng: &mut impl Rng) -> Vec<String> {
        if !self.alive {
            return Vec::new();
        }
        self.body.heal(info, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::catalog;

    fn test_actor() -> Actor {
        Actor::new("Wanderer", &BodyCreationInfo::humanoid(80.0, 20.0, 42.0)).unwrap()
    }

    #[test]
    fn test_fresh_actor_is_alive_and_able() {
        let actor = test_actor();
        assert!(actor.alive);
        assert_eq!(actor.capacity(Capacity::Moving), 1.0);
    }

    #[test]
    fn test_effect_modifiers_reduce_capacity() {
        let mut actor = test_actor();
        actor.effects.add(catalog::shivering(1.0));
        assert!((actor.capacity(Capacity::Manipulation) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_capacity_floor_under_stacked_effects() {
        let mut actor = test_actor();
        actor.effects.add(catalog::severe_hypothermia(1.0));
        let mut drained = catalog::exhaustion();
        drained.severity = 1.0;
        actor.effects.add(drained);
        // -0.6 and -0.4 stack to the floor, never below it
        assert_eq!(actor.capacity(Capacity::Consciousness), 0.0);
    }
}
