//! Registry of active effects on one actor
//!
//! Owns effect instances exclusively: applies the per-kind stacking
//! policy on add, decays severity over time, and aggregates survival
//! deltas and capacity modifiers for the owning actor.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::body::capacity::Capacity;
use crate::effects::effect::{Effect, EffectKind, StackPolicy};
use crate::survival::data::SurvivalDelta;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EffectRegistry {
    effects: Vec<Effect>,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &[Effect] {
        &self.effects
    }

    pub fn is_active(&self, kind: &EffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == *kind)
    }

    pub fn get(&self, kind: &EffectKind) -> Option<&Effect> {
        self.effects.iter().find(|e| e.kind == *kind)
    }

    /// Add an effect, applying its stacking policy against any existing
    /// instance with the same identity. Returns display messages.
    pub fn add(&mut self, effect: Effect) -> Vec<String> {
        let mut messages = Vec::new();
        if let Some(existing) = self.effects.iter_mut().find(|e| e.same_instance(&effect)) {
            match effect.stack_policy {
                StackPolicy::Replace => existing.severity = effect.severity,
                StackPolicy::KeepMax => {
                    existing.severity = existing.severity.max(effect.severity)
                }
            }
            return messages;
        }
        if let Some(msg) = &effect.apply_message {
            messages.push(msg.clone());
        }
        tracing::debug!(kind = %effect.kind, severity = effect.severity, "effect added");
        self.effects.push(effect);
        messages
    }

    /// Remove every instance of a kind. Removing an absent kind is a
    /// recoverable no-op.
    pub fn remove(&mut self, kind: &EffectKind) -> Vec<String> {
        if !self.is_active(kind) {
            tracing::debug!(kind = %kind, "removal of inactive effect, ignoring");
            return Vec::new();
        }
        let mut messages = Vec::new();
        self.effects.retain(|e| {
            if e.kind == *kind {
                if let Some(msg) = &e.remove_message {
                    messages.push(msg.clone());
                }
                false
            } else {
                true
            }
        });
        messages
    }

    /// Advance time: drift severity by the hourly rate, tick down
    /// explicit durations, drop what has run out.
    pub fn update(&mut self, minutes: f32) -> Vec<String> {
        let mut messages = Vec::new();
        for effect in &mut self.effects {
            effect.severity =
                (effect.severity + effect.hourly_severity_change * minutes / 60.0).clamp(0.0, 1.0);
            if let Some(duration) = &mut effect.duration_minutes {
                *duration -= minutes;
            }
        }
        self.effects.retain(|e| {
            let expired = e.severity <= 0.0 || e.duration_minutes.is_some_and(|d| d <= 0.0);
            if expired {
                if let Some(msg) = &e.remove_message {
                    messages.push(msg.clone());
                }
                tracing::debug!(kind = %e.kind, "effect expired");
            }
            !expired
        });
        messages
    }

    /// Severity-weighted sum of per-minute survival deltas.
    ///
    /// For collaborators that update SurvivalData without running the
    /// processor; the processor applies active effects itself.
    pub fn survival_delta(&self) -> SurvivalDelta {
        self.effects
            .iter()
            .fold(SurvivalDelta::ZERO, |acc, e| acc + e.effective_stats())
    }

    /// Severity-weighted capacity modifiers, summed per capacity
    pub fn capacity_modifiers(&self) -> AHashMap<Capacity, f32> {
        let mut mods = AHashMap::new();
        for effect in &self.effects {
            for (capacity, modifier) in &effect.capacity_mods {
                *mods.entry(*capacity).or_insert(0.0) += modifier * effect.severity;
            }
        }
        mods
    }
}
