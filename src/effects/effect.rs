//! Effects: time-bounded modifiers on survival deltas and capacities
//!
//! An effect is an immutable configuration plus a mutable severity. The
//! registry owns active instances; the catalog builds the standard kinds.

use serde::{Deserialize, Serialize};

use crate::body::capacity::Capacity;
use crate::survival::data::SurvivalDelta;

/// Identity of an effect. Custom covers collaborator-defined effects
/// (combat crits, narrative events).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    Shivering,
    Hypothermia,
    SevereHypothermia,
    Frostbite,
    Sweating,
    Hyperthermia,
    Starvation,
    Dehydration,
    Exhaustion,
    Bleeding,
    Custom(String),
}

impl EffectKind {
    pub fn name(&self) -> &str {
        match self {
            EffectKind::Shivering => "Shivering",
            EffectKind::Hypothermia => "Hypothermia",
            EffectKind::SevereHypothermia => "Severe Hypothermia",
            EffectKind::Frostbite => "Frostbite",
            EffectKind::Sweating => "Sweating",
            EffectKind::Hyperthermia => "Hyperthermia",
            EffectKind::Starvation => "Starvation",
            EffectKind::Dehydration => "Dehydration",
            EffectKind::Exhaustion => "Exhaustion",
            EffectKind::Bleeding => "Bleeding",
            EffectKind::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What happens when a kind already present is added again.
///
/// One policy per kind, fixed by the catalog: threshold-driven kinds
/// Replace (severity is recomputed from current physiology each
/// evaluation), externally-sourced kinds KeepMax (a weak re-add never
/// erases a strong instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackPolicy {
    Replace,
    KeepMax,
}

/// An active (or about-to-be-added) effect instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    /// 0-1 intensity; scales stats and capacity modifiers
    pub severity: f32,
    /// Set for per-part effects such as frostbite
    pub target_part: Option<String>,
    /// Per-minute survival deltas, pre-severity
    pub stats: SurvivalDelta,
    /// Additive capacity modifiers, pre-severity
    pub capacity_mods: Vec<(Capacity, f32)>,
    /// Severity drift per hour; negative values decay toward removal
    pub hourly_severity_change: f32,
    /// Hard lifetime, minutes; None lives until severity hits zero
    pub duration_minutes: Option<f32>,
    /// Multiple instances allowed (deduped on target_part)
    pub allow_multiple: bool,
    pub stack_policy: StackPolicy,
    pub apply_message: Option<String>,
    pub remove_message: Option<String>,
}

impl Effect {
    /// Minimal effect with no deltas or modifiers
    pub fn new(kind: EffectKind, severity: f32) -> Self {
        Self {
            kind,
            severity: severity.clamp(0.0, 1.0),
            target_part: None,
            stats: SurvivalDelta::ZERO,
            capacity_mods: Vec::new(),
            hourly_severity_change: 0.0,
            duration_minutes: None,
            allow_multiple: false,
            stack_policy: StackPolicy::Replace,
            apply_message: None,
            remove_message: None,
        }
    }

    /// Same identity for stacking purposes: kind plus target part
    pub fn same_instance(&self, other: &Effect) -> bool {
        self.kind == other.kind && self.target_part == other.target_part
    }

    /// Survival delta contribution at current severity, per minute
    pub fn effective_stats(&self) -> SurvivalDelta {
        self.stats.scaled(self.severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_clamped_on_creation() {
        assert_eq!(Effect::new(EffectKind::Shivering, 1.7).severity, 1.0);
        assert_eq!(Effect::new(EffectKind::Shivering, -0.3).severity, 0.0);
    }

    #[test]
    fn test_same_instance_requires_matching_part() {
        let mut left = Effect::new(EffectKind::Frostbite, 0.5);
        left.target_part = Some("Left Hand".into());
        let mut right = left.clone();
        right.target_part = Some("Right Hand".into());
        assert!(!left.same_instance(&right));
        assert!(left.same_instance(&left.clone()));
    }

    #[test]
    fn test_effective_stats_scale_with_severity() {
        let mut effect = Effect::new(EffectKind::Sweating, 0.5);
        effect.stats = SurvivalDelta {
            hydration: -0.2,
            ..SurvivalDelta::ZERO
        };
        assert!((effect.effective_stats().hydration + 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_custom_kind_display() {
        let kind = EffectKind::Custom("Adrenaline".into());
        assert_eq!(kind.name(), "Adrenaline");
    }
}
