//! Survival system constants - all tunable values in one place
//!
//! Temperatures are Fahrenheit, masses kilograms, calories kcal,
//! energy is minutes of wakefulness banked.

/// Energy (wakefulness minutes) spent per minute awake
pub const BASE_EXHAUSTION_RATE: f32 = 1.0;

/// Hydration units lost per minute awake (full tank is 100)
pub const BASE_DEHYDRATION_RATE: f32 = 0.07;

/// Longest wakefulness bank: 16 hours
pub const MAX_ENERGY_MINUTES: f32 = 960.0;

/// Sleep banks energy at twice the waking depletion rate
pub const SLEEP_ENERGY_FACTOR: f32 = 2.0;

/// Hydration drains slower while asleep
pub const SLEEP_HYDRATION_FACTOR: f32 = 0.7;

/// Metabolic rate while asleep, replaces activity_level
pub const SLEEP_ACTIVITY_LEVEL: f32 = 0.5;

// Metabolism (kcal/day): 370 + 21.6 * muscle_kg + 6.17 * fat_kg
pub const BMR_BASE: f32 = 370.0;
pub const BMR_PER_MUSCLE_KG: f32 = 21.6;
pub const BMR_PER_FAT_KG: f32 = 6.17;

/// Fraction of burned calories converted to body heat (degF per kcal)
pub const METABOLIC_HEAT_PER_KCAL: f32 = 1.0 / 24000.0;

// Thermal exchange model
/// Skin runs cooler than the core
pub const SKIN_TEMP_OFFSET: f32 = 8.4;
/// Base exchange rate per hour of exposure
pub const THERMAL_RATE_BASE: f32 = 1.0 / 120.0;
/// Gradient magnitude that doubles the exchange rate
pub const THERMAL_GRADIENT_SCALE: f32 = 40.0;
/// Insulation (natural + equipment) never blocks everything
pub const MAX_TOTAL_INSULATION: f32 = 0.95;

// Temperature effect thresholds (degF)
pub const SHIVERING_THRESHOLD: f32 = 97.0;
pub const HYPOTHERMIA_THRESHOLD: f32 = 95.0;
pub const SEVERE_HYPOTHERMIA_THRESHOLD: f32 = 89.6;
pub const FROSTBITE_THRESHOLD: f32 = 89.6;
pub const SWEATING_THRESHOLD: f32 = 99.0;
pub const HYPERTHERMIA_THRESHOLD: f32 = 100.0;

// Severity ramp widths: severity = clamp((threshold - temp) / range, ..)
pub const SHIVERING_SEVERITY_RANGE: f32 = 5.0;
pub const HYPOTHERMIA_SEVERITY_RANGE: f32 = 10.0;
pub const SEVERE_HYPOTHERMIA_SEVERITY_RANGE: f32 = 10.0;
pub const FROSTBITE_SEVERITY_RANGE: f32 = 12.0;
pub const SWEATING_SEVERITY_RANGE: f32 = 4.0;
pub const HYPERTHERMIA_SEVERITY_RANGE: f32 = 8.0;

/// Floor so a just-crossed threshold still registers
pub const MIN_EFFECT_SEVERITY: f32 = 0.01;

/// Chance per evaluation that an already-active temperature effect
/// re-announces itself ("you are still cold")
pub const RENOTIFY_CHANCE: f64 = 0.10;

/// Core temperatures beyond which the actor dies
pub const DEATH_TEMP_LOW: f32 = 78.0;
pub const DEATH_TEMP_HIGH: f32 = 110.0;

/// Environmental damage per hour at full frostbite severity
pub const FROSTBITE_DAMAGE_PER_HOUR: f32 = 2.0;

/// Extremities that frostbite scores independently, by part name
pub const FROSTBITE_EXTREMITIES: [&str; 4] =
    ["Left Hand", "Right Hand", "Left Foot", "Right Foot"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_ordering() {
        assert!(SHIVERING_THRESHOLD > HYPOTHERMIA_THRESHOLD);
        assert!(HYPOTHERMIA_THRESHOLD > SEVERE_HYPOTHERMIA_THRESHOLD);
        assert!(SWEATING_THRESHOLD < HYPERTHERMIA_THRESHOLD);
        assert!(SHIVERING_THRESHOLD < SWEATING_THRESHOLD);
    }

    #[test]
    fn test_rates_reasonable() {
        assert!(BASE_DEHYDRATION_RATE > 0.0 && BASE_DEHYDRATION_RATE < 1.0);
        assert!(BASE_EXHAUSTION_RATE > 0.0);
        assert!(MAX_TOTAL_INSULATION < 1.0);
        assert!(MIN_EFFECT_SEVERITY > 0.0 && MIN_EFFECT_SEVERITY < 0.1);
    }

    #[test]
    fn test_death_band_contains_effect_thresholds() {
        assert!(DEATH_TEMP_LOW < SEVERE_HYPOTHERMIA_THRESHOLD);
        assert!(DEATH_TEMP_HIGH > HYPERTHERMIA_THRESHOLD);
    }
}
