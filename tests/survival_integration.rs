//! Survival processor integration tests
//!
//! End-to-end checks of the metabolic and thermal pipeline, the
//! documented hypothermia scenario, and property tests for the linear
//! terms' additivity and the clamp invariants.

use frostmarch::effects::effect::EffectKind;
use frostmarch::survival::constants::*;
use frostmarch::survival::data::SurvivalData;
use frostmarch::survival::processor::{process, sleep};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn base_data() -> SurvivalData {
    let mut data = SurvivalData::new(80.0, 35.0, 15.0);
    data.calories = 1000.0;
    data
}

#[test]
fn test_identity_at_zero_minutes() {
    let data = base_data();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let result = process(&data, 0.0, &[], &mut rng);
    assert_eq!(result.data, data);
    assert!(result.effects.is_empty());
    assert!(result.messages.is_empty());
}

/// The documented scenario: half-fed, full hydration, 98.6 degF body in a
/// 32 degF environment with no insulation, one hour at a time.
#[test]
fn test_freezing_hour_scenario() {
    let mut data = base_data();
    data.environment_temp = 32.0;
    data.equipment_insulation = 0.0;
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let result = process(&data, 60.0, &[], &mut rng);
    assert!(result.data.temperature < 98.6);
    assert!(
        result.data.temperature > HYPOTHERMIA_THRESHOLD,
        "one hour should not reach hypothermia, got {}",
        result.data.temperature
    );
    assert!(!result
        .effects
        .iter()
        .any(|e| e.kind == EffectKind::Hypothermia));

    // Keep repeating the hour until the threshold is crossed
    let mut data = result.data;
    for _ in 0..48 {
        let result = process(&data, 60.0, &[], &mut rng);
        data = result.data;
        if data.temperature < HYPOTHERMIA_THRESHOLD {
            let hypo: Vec<_> = result
                .effects
                .iter()
                .filter(|e| e.kind == EffectKind::Hypothermia)
                .collect();
            assert_eq!(hypo.len(), 1, "exactly one hypothermia instance");
            let expected =
                ((HYPOTHERMIA_THRESHOLD - data.temperature) / 10.0).clamp(0.01, 1.0);
            assert!((hypo[0].severity - expected).abs() < 1e-5);
            return;
        }
    }
    panic!("hypothermia never set in");
}

#[test]
fn test_sleep_eight_hours_from_low_energy() {
    let mut data = base_data();
    data.energy = 100.0;
    data.environment_temp = 90.2;
    let result = sleep(&data, 480.0);
    assert!(result.data.energy > 100.0);
    assert!(result.data.energy <= MAX_ENERGY_MINUTES);

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut awake = data.clone();
    awake.activity_level = 1.0;
    let waking = process(&awake, 480.0, &[], &mut rng);
    assert!(result.data.calories > waking.data.calories);
}

#[test]
fn test_cold_resistance_slows_the_freeze() {
    let mut bare = base_data();
    bare.environment_temp = 10.0;
    let mut hardy = bare.clone();
    hardy.cold_resistance = 0.5;

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let bare_result = process(&bare, 60.0, &[], &mut rng);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let hardy_result = process(&hardy, 60.0, &[], &mut rng);
    assert!(hardy_result.data.temperature > bare_result.data.temperature);
}

#[test]
fn test_activity_scales_calorie_burn() {
    let mut resting = base_data();
    resting.environment_temp = 90.2;
    resting.activity_level = 1.0;
    let mut laboring = resting.clone();
    laboring.activity_level = 2.5;

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let rest = process(&resting, 60.0, &[], &mut rng);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let labor = process(&laboring, 60.0, &[], &mut rng);
    let rest_burn = resting.calories - rest.data.calories;
    let labor_burn = laboring.calories - labor.data.calories;
    assert!((labor_burn / rest_burn - 2.5).abs() < 1e-3);
}

proptest! {
    /// Linear terms match across a split at any point; the thermal term
    /// stays within its documented tolerance.
    #[test]
    fn prop_split_call_additivity(split in 1.0f32..59.0, env in -20.0f32..110.0) {
        let mut data = base_data();
        data.environment_temp = env;
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let whole = process(&data, 60.0, &[], &mut rng);

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let first = process(&data, split, &[], &mut rng);
        let second = process(&first.data, 60.0 - split, &[], &mut rng);

        prop_assert!((whole.data.hydration - second.data.hydration).abs() < 1e-3);
        prop_assert!((whole.data.energy - second.data.energy).abs() < 1e-3);
        prop_assert!((whole.data.calories - second.data.calories).abs() < 0.1);
        prop_assert!((whole.data.temperature - second.data.temperature).abs() < 0.1);
    }

    /// Resources never go negative, whatever the elapsed time.
    #[test]
    fn prop_resources_clamped(minutes in 0.0f32..10_000.0, env in -40.0f32..130.0) {
        let mut data = base_data();
        data.calories = 50.0;
        data.hydration = 5.0;
        data.energy = 30.0;
        data.environment_temp = env;
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let result = process(&data, minutes, &[], &mut rng);
        prop_assert!(result.data.calories >= 0.0);
        prop_assert!(result.data.hydration >= 0.0);
        prop_assert!(result.data.energy >= 0.0);
    }

    /// Generated threshold effects always carry a valid severity.
    #[test]
    fn prop_generated_severities_in_range(body_temp in 60.0f32..115.0) {
        let mut data = base_data();
        data.temperature = body_temp;
        data.environment_temp = body_temp - SKIN_TEMP_OFFSET;
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let result = process(&data, 1.0, &[], &mut rng);
        for effect in &result.effects {
            prop_assert!(effect.severity >= MIN_EFFECT_SEVERITY);
            prop_assert!(effect.severity <= 1.0);
        }
    }
}
