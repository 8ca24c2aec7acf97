//! Functional capacities derived from body-part condition
//!
//! A capacity is a 0.0-1.0 rating of how well the body performs a function
//! (moving, seeing, pumping blood). Each capacity aggregates the health
//! ratios of a fixed set of parts or organs using one of three strategies.

use serde::{Deserialize, Serialize};

/// Named functional capacities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capacity {
    Moving,
    Manipulation,
    Breathing,
    Consciousness,
    Sight,
    Hearing,
    BloodPumping,
    Digestion,
    BloodFiltration,
    Eating,
    Talking,
}

impl Capacity {
    /// Returns all capacities
    pub fn all() -> [Capacity; 11] {
        [
            Capacity::Moving,
            Capacity::Manipulation,
            Capacity::Breathing,
            Capacity::Consciousness,
            Capacity::Sight,
            Capacity::Hearing,
            Capacity::BloodPumping,
            Capacity::Digestion,
            Capacity::BloodFiltration,
            Capacity::Eating,
            Capacity::Talking,
        ]
    }
}

/// How per-part terms combine into a capacity value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Aggregation {
    /// Bottleneck: the worst matching part dominates.
    /// One destroyed leg zeroes Moving even if the other is fine.
    Min,
    /// Redundant pairs: losing one eye halves Sight, not zeroes it.
    Average,
    /// Unique organs: the single matching part's term.
    SinglePart,
}

/// Part/organ name fragments that feed a capacity, and the strategy used.
///
/// Matching is by substring over qualified part and organ names, so "Leg"
/// catches both "Left Leg" and "Right Leg".
pub fn capacity_sources(capacity: Capacity) -> (Aggregation, &'static [&'static str]) {
    use Aggregation::*;
    match capacity {
        Capacity::Moving => (Min, &["Leg", "Spine", "Pelvis"]),
        Capacity::Manipulation => (Min, &["Arm", "Hand", "Clavicle"]),
        Capacity::Breathing => (Min, &["Lung", "Ribcage", "Sternum"]),
        Capacity::Digestion => (Min, &["Stomach", "Liver"]),
        Capacity::Eating => (Min, &["Mouth", "Jaw"]),
        Capacity::Talking => (Min, &["Mouth", "Jaw", "Tongue"]),
        Capacity::Sight => (Average, &["Eye"]),
        Capacity::Hearing => (Average, &["Ear"]),
        Capacity::BloodFiltration => (Average, &["Kidney"]),
        Capacity::Consciousness => (SinglePart, &["Brain"]),
        Capacity::BloodPumping => (SinglePart, &["Heart"]),
    }
}

/// Combine weighted health terms according to the strategy.
///
/// An empty term list means no matching part exists on this body plan;
/// the capacity defaults to 1.0 (no penalty) rather than erroring.
pub fn aggregate(strategy: Aggregation, terms: &[f32]) -> f32 {
    if terms.is_empty() {
        return 1.0;
    }
    let value = match strategy {
        Aggregation::Min => terms.iter().copied().fold(f32::INFINITY, f32::min),
        Aggregation::Average => terms.iter().sum::<f32>() / terms.len() as f32,
        Aggregation::SinglePart => terms[0],
    };
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_capacities_have_sources() {
        for cap in Capacity::all() {
            let (_, names) = capacity_sources(cap);
            assert!(!names.is_empty(), "{cap:?} has no source parts");
        }
    }

    #[test]
    fn test_min_aggregation_is_bottleneck() {
        assert_eq!(aggregate(Aggregation::Min, &[0.5, 1.0, 1.0]), 0.5);
        assert_eq!(aggregate(Aggregation::Min, &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_average_aggregation_halves_on_one_loss() {
        assert_eq!(aggregate(Aggregation::Average, &[0.0, 1.0]), 0.5);
    }

    #[test]
    fn test_empty_terms_default_to_full() {
        assert_eq!(aggregate(Aggregation::Min, &[]), 1.0);
        assert_eq!(aggregate(Aggregation::SinglePart, &[]), 1.0);
    }

    #[test]
    fn test_aggregate_clamps() {
        assert_eq!(aggregate(Aggregation::SinglePart, &[1.4]), 1.0);
        assert_eq!(aggregate(Aggregation::Min, &[-0.2]), 0.0);
    }
}
