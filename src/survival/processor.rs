//! The survival processor: a pure transform over physiological state
//!
//! `process` evolves calories, hydration, energy and body temperature for
//! an elapsed span of minutes, generates threshold effects from the new
//! temperature, and applies the deltas of already-active effects. It
//! reads nothing but its inputs and produces nothing but its result;
//! the only randomness is the re-notification roll, injected by the
//! caller.

use rand::Rng;

use crate::effects::catalog::{self, cold_severity, hot_severity};
use crate::effects::effect::Effect;
use crate::survival::constants::*;
use crate::survival::data::SurvivalData;
use crate::survival::result::SurvivalResult;
use crate::survival::thermal::{thermal_exchange, TemperatureBand};

/// Basal metabolic rate in kcal/day.
///
/// Mass-driven base, scaled down as health falls: a badly injured body
/// slows its metabolism, bottoming out at 70% of the healthy rate.
pub fn bmr_kcal_per_day(data: &SurvivalData) -> f32 {
    let base = BMR_BASE + BMR_PER_MUSCLE_KG * data.muscle_weight + BMR_PER_FAT_KG * data.fat_weight;
    base * (0.7 + 0.3 * data.health_percent)
}

/// Calories burned over `minutes` at the given activity level
fn calories_burned(data: &SurvivalData, activity_level: f32, minutes: f32) -> f32 {
    bmr_kcal_per_day(data) * activity_level / 24.0 / 60.0 * minutes
}

/// Evolve waking physiology over `minutes`, with `active` the effects
/// currently on the actor (their deltas apply, and their presence gates
/// the "still cold" re-notification messages).
pub fn process(
    data: &SurvivalData,
    minutes: f32,
    active: &[Effect],
    rng: &mut impl Rng,
) -> SurvivalResult {
    if minutes <= 0.0 {
        return SurvivalResult::unchanged(data);
    }

    let mut working = data.clone();
    let mut messages = Vec::new();

    // 1-2. Linear wakefulness and hydration decay
    working.energy = (working.energy - BASE_EXHAUSTION_RATE * minutes).max(0.0);
    working.hydration = (working.hydration - BASE_DEHYDRATION_RATE * minutes).max(0.0);

    // 3-4. Metabolism and its waste heat
    let burned = calories_burned(&working, working.activity_level, minutes);
    working.calories = (working.calories - burned).max(0.0);
    working.temperature += burned * METABOLIC_HEAT_PER_KCAL;

    // 5. Thermal exchange with the environment
    let band_before = TemperatureBand::classify(working.temperature);
    working.temperature += thermal_exchange(
        working.temperature,
        working.environment_temp,
        working.cold_resistance,
        working.equipment_insulation,
        minutes,
    );
    let band_after = TemperatureBand::classify(working.temperature);
    if band_after != band_before {
        messages.push(band_after.describe().to_string());
    }

    // 6. Threshold effects against the new temperature
    let effects = temperature_effects(working.temperature, active, rng, &mut messages);

    // 7. Deltas of already-active effects
    for effect in active {
        effect.effective_stats().scaled(minutes).apply_to(&mut working);
    }

    SurvivalResult {
        data: working,
        effects,
        messages,
    }
}

/// Evolve sleeping physiology: fixed low activity, slower hydration
/// loss, energy banked at double the waking depletion rate. Thermal
/// exchange still runs (a freezing sleeper keeps freezing); threshold
/// effects are only evaluated on the waking path.
pub fn sleep(data: &SurvivalData, minutes: f32) -> SurvivalResult {
    if minutes <= 0.0 {
        return SurvivalResult::unchanged(data);
    }

    let mut working = data.clone();
    let mut messages = Vec::new();

    working.hydration =
        (working.hydration - BASE_DEHYDRATION_RATE * SLEEP_HYDRATION_FACTOR * minutes).max(0.0);
    working.energy = (working.energy + SLEEP_ENERGY_FACTOR * BASE_EXHAUSTION_RATE * minutes)
        .min(MAX_ENERGY_MINUTES);

    let burned = calories_burned(&working, SLEEP_ACTIVITY_LEVEL, minutes);
    working.calories = (working.calories - burned).max(0.0);
    working.temperature += burned * METABOLIC_HEAT_PER_KCAL;

    let band_before = TemperatureBand::classify(working.temperature);
    working.temperature += thermal_exchange(
        working.temperature,
        working.environment_temp,
        working.cold_resistance,
        working.equipment_insulation,
        minutes,
    );
    let band_after = TemperatureBand::classify(working.temperature);
    if band_after != band_before {
        messages.push(format!("You wake chilled: {}", band_after.describe()));
    }

    SurvivalResult {
        data: working,
        effects: Vec::new(),
        messages,
    }
}

// Generate threshold effects for the current temperature. A kind already
// on the actor re-announces with a small probability; the strong "new"
// message belongs to the registry's apply path.
fn temperature_effects(
    temperature: f32,
    active: &[Effect],
    rng: &mut impl Rng,
    messages: &mut Vec<String>,
) -> Vec<Effect> {
    let mut generated = Vec::new();

    if temperature < SHIVERING_THRESHOLD {
        generated.push(catalog::shivering(cold_severity(
            temperature,
            SHIVERING_THRESHOLD,
            SHIVERING_SEVERITY_RANGE,
        )));
    }
    if temperature < HYPOTHERMIA_THRESHOLD {
        generated.push(catalog::hypothermia(cold_severity(
            temperature,
            HYPOTHERMIA_THRESHOLD,
            HYPOTHERMIA_SEVERITY_RANGE,
        )));
    }
    if temperature < SEVERE_HYPOTHERMIA_THRESHOLD {
        generated.push(catalog::severe_hypothermia(cold_severity(
            temperature,
            SEVERE_HYPOTHERMIA_THRESHOLD,
            SEVERE_HYPOTHERMIA_SEVERITY_RANGE,
        )));
    }
    if temperature < FROSTBITE_THRESHOLD {
        // Scored once per extremity, each its own instance
        for part in FROSTBITE_EXTREMITIES {
            generated.push(catalog::frostbite(
                cold_severity(temperature, FROSTBITE_THRESHOLD, FROSTBITE_SEVERITY_RANGE),
                part,
            ));
        }
    }
    if temperature > SWEATING_THRESHOLD {
        generated.push(catalog::sweating(hot_severity(
            temperature,
            SWEATING_THRESHOLD,
            SWEATING_SEVERITY_RANGE,
        )));
    }
    if temperature > HYPERTHERMIA_THRESHOLD {
        generated.push(catalog::hyperthermia(hot_severity(
            temperature,
            HYPERTHERMIA_THRESHOLD,
            HYPERTHERMIA_SEVERITY_RANGE,
        )));
    }

    let mut renotified_cold = false;
    let mut renotified_hot = false;
    for effect in &generated {
        let already_active = active.iter().any(|a| a.same_instance(effect));
        if already_active && rng.gen_bool(RENOTIFY_CHANCE) {
            if temperature < SHIVERING_THRESHOLD && !renotified_cold {
                messages.push("You are still cold to the bone".to_string());
                renotified_cold = true;
            } else if temperature > SWEATING_THRESHOLD && !renotified_hot {
                messages.push("The heat is relentless".to_string());
                renotified_hot = true;
            }
        }
    }

    generated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::effect::EffectKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_data() -> SurvivalData {
        SurvivalData::new(80.0, 35.0, 15.0)
    }

    #[test]
    fn test_zero_minutes_is_identity() {
        let data = test_data();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let result = process(&data, 0.0, &[], &mut rng);
        assert_eq!(result.data, data);
        assert!(result.effects.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_resources_non_increasing_awake() {
        let data = test_data();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let result = process(&data, 90.0, &[], &mut rng);
        assert!(result.data.calories < data.calories);
        assert!(result.data.hydration < data.hydration);
        assert!(result.data.energy < data.energy);
    }

    #[test]
    fn test_bmr_scales_with_health() {
        let mut data = test_data();
        let healthy = bmr_kcal_per_day(&data);
        data.health_percent = 0.0;
        let injured = bmr_kcal_per_day(&data);
        // Injury slows the burn to 70% of the healthy rate
        assert!(injured < healthy);
        assert!((healthy / injured - 1.0 / 0.7).abs() < 1e-3);
    }

    #[test]
    fn test_comfortable_environment_generates_no_effects() {
        let mut data = test_data();
        data.environment_temp = 90.2; // matches skin temperature
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let result = process(&data, 60.0, &[], &mut rng);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_one_freezing_hour_cools_without_hypothermia() {
        let mut data = test_data();
        data.environment_temp = 32.0;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let result = process(&data, 60.0, &[], &mut rng);
        assert!(result.data.temperature < 98.6);
        assert!(result.data.temperature > HYPOTHERMIA_THRESHOLD);
        assert!(!result
            .effects
            .iter()
            .any(|e| e.kind == EffectKind::Hypothermia));
    }

    #[test]
    fn test_repeated_freezing_hours_reach_hypothermia() {
        let mut data = test_data();
        data.environment_temp = 32.0;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut hours = 0;
        loop {
            let result = process(&data, 60.0, &[], &mut rng);
            data = result.data;
            hours += 1;
            if data.temperature < HYPOTHERMIA_THRESHOLD {
                let check = process(&data, 60.0, &[], &mut rng);
                let hypo: Vec<_> = check
                    .effects
                    .iter()
                    .filter(|e| e.kind == EffectKind::Hypothermia)
                    .collect();
                assert_eq!(hypo.len(), 1);
                let expected = ((HYPOTHERMIA_THRESHOLD - check.data.temperature)
                    / HYPOTHERMIA_SEVERITY_RANGE)
                    .clamp(MIN_EFFECT_SEVERITY, 1.0);
                assert!((hypo[0].severity - expected).abs() < 1e-5);
                break;
            }
            assert!(hours < 48, "never reached hypothermia");
        }
    }

    #[test]
    fn test_frostbite_generated_per_extremity() {
        let mut data = test_data();
        data.temperature = 88.0;
        data.environment_temp = 88.0 - SKIN_TEMP_OFFSET; // hold temperature steady
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let result = process(&data, 10.0, &[], &mut rng);
        let frostbites: Vec<_> = result
            .effects
            .iter()
            .filter(|e| e.kind == EffectKind::Frostbite)
            .collect();
        assert_eq!(frostbites.len(), FROSTBITE_EXTREMITIES.len());
        let mut parts: Vec<_> = frostbites
            .iter()
            .map(|e| e.target_part.clone().unwrap())
            .collect();
        parts.sort();
        parts.dedup();
        assert_eq!(parts.len(), FROSTBITE_EXTREMITIES.len());
    }

    #[test]
    fn test_hot_side_effects() {
        let mut data = test_data();
        data.temperature = 101.0;
        data.environment_temp = 101.0 - SKIN_TEMP_OFFSET;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let result = process(&data, 10.0, &[], &mut rng);
        assert!(result.effects.iter().any(|e| e.kind == EffectKind::Sweating));
        assert!(result
            .effects
            .iter()
            .any(|e| e.kind == EffectKind::Hyperthermia));
    }

    #[test]
    fn test_active_effect_deltas_apply() {
        let mut data = test_data();
        data.environment_temp = 90.2;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let plain = process(&data, 60.0, &[], &mut rng);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let sweating = catalog::sweating(1.0);
        let with_effect = process(&data, 60.0, &[sweating.clone()], &mut rng);
        let extra = plain.data.hydration - with_effect.data.hydration;
        // sweating drains 0.15/min at severity 1.0
        assert!((extra - 0.15 * 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_sleep_banks_energy_and_clamps() {
        let mut data = test_data();
        data.energy = 100.0;
        data.environment_temp = 90.2;
        let result = sleep(&data, 480.0);
        assert!(result.data.energy > 100.0);
        assert!(result.data.energy <= MAX_ENERGY_MINUTES);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_sleep_burns_fewer_calories_than_waking() {
        let mut data = test_data();
        data.activity_level = 1.0;
        data.environment_temp = 90.2;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let awake = process(&data, 480.0, &[], &mut rng);
        let asleep = sleep(&data, 480.0);
        assert!(asleep.data.calories > awake.data.calories);
    }

    #[test]
    fn test_sleep_hydration_decays_slower() {
        let mut data = test_data();
        data.environment_temp = 90.2;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let awake = process(&data, 60.0, &[], &mut rng);
        let asleep = sleep(&data, 60.0);
        assert!(asleep.data.hydration > awake.data.hydration);
    }

    #[test]
    fn test_linear_terms_additive_across_split_calls() {
        let mut data = test_data();
        data.environment_temp = 32.0;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let whole = process(&data, 60.0, &[], &mut rng);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let first = process(&data, 30.0, &[], &mut rng);
        let second = process(&first.data, 30.0, &[], &mut rng);

        assert!((whole.data.hydration - second.data.hydration).abs() < 1e-3);
        assert!((whole.data.energy - second.data.energy).abs() < 1e-3);
        // Metabolic burn is linear in time at fixed mass/health
        assert!((whole.data.calories - second.data.calories).abs() < 0.05);
        // The thermal term is nonlinear; it diverges, but only slightly
        assert!((whole.data.temperature - second.data.temperature).abs() < 0.05);
    }
}
