//! Thermal exchange between body and environment
//!
//! Exchange is nonlinear: the rate grows with the insulated gradient
//! magnitude, so larger temperature differences transfer heat
//! proportionally faster. Insulation attenuates the gradient before the
//! rate is computed.

use serde::{Deserialize, Serialize};

use crate::survival::constants::{
    MAX_TOTAL_INSULATION, SKIN_TEMP_OFFSET, THERMAL_GRADIENT_SCALE, THERMAL_RATE_BASE,
};

/// One application of the exchange model.
///
/// Returns the body temperature change for `minutes` of exposure.
/// `cold_resistance` and `equipment_insulation` stack, capped so exposure
/// is never fully blocked.
pub fn thermal_exchange(
    body_temp: f32,
    environment_temp: f32,
    cold_resistance: f32,
    equipment_insulation: f32,
    minutes: f32,
) -> f32 {
    let natural = cold_resistance.clamp(0.0, 1.0);
    let total = (natural + equipment_insulation).clamp(0.0, MAX_TOTAL_INSULATION);
    let skin_temp = body_temp - SKIN_TEMP_OFFSET;
    let diff = environment_temp - skin_temp;
    let insulated_diff = diff * (1.0 - total);
    let rate = THERMAL_RATE_BASE * (1.0 + insulated_diff.abs() / THERMAL_GRADIENT_SCALE);
    insulated_diff * rate * (minutes / 60.0)
}

/// Coarse temperature bands, used only to detect edge transitions for
/// message emission. Pure classification, no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureBand {
    Freezing,
    Cold,
    Cool,
    Warm,
    Hot,
}

impl TemperatureBand {
    pub fn classify(temperature: f32) -> Self {
        if temperature < 90.0 {
            TemperatureBand::Freezing
        } else if temperature < 96.0 {
            TemperatureBand::Cold
        } else if temperature < 98.0 {
            TemperatureBand::Cool
        } else if temperature <= 99.5 {
            TemperatureBand::Warm
        } else {
            TemperatureBand::Hot
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            TemperatureBand::Freezing => "You are freezing",
            TemperatureBand::Cold => "You are cold",
            TemperatureBand::Cool => "You feel a chill",
            TemperatureBand::Warm => "You feel comfortable",
            TemperatureBand::Hot => "You are overheating",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cold_environment_cools_body() {
        let delta = thermal_exchange(98.6, 32.0, 0.0, 0.0, 60.0);
        assert!(delta < 0.0);
        // Bare at freezing: roughly 1.2 degF lost in the first hour
        assert!(delta > -2.0 && delta < -0.8, "delta = {delta}");
    }

    #[test]
    fn test_hot_environment_warms_body() {
        let delta = thermal_exchange(98.6, 120.0, 0.0, 0.0, 60.0);
        assert!(delta > 0.0);
    }

    #[test]
    fn test_neutral_at_skin_temperature() {
        // Environment matching skin temp exchanges nothing
        let delta = thermal_exchange(98.6, 98.6 - 8.4, 0.0, 0.0, 60.0);
        assert!(delta.abs() < 1e-6);
    }

    #[test]
    fn test_insulation_attenuates() {
        let bare = thermal_exchange(98.6, 32.0, 0.0, 0.0, 60.0);
        let dressed = thermal_exchange(98.6, 32.0, 0.0, 0.8, 60.0);
        assert!(dressed > bare);
        assert!(dressed < 0.0);
    }

    #[test]
    fn test_insulation_caps_below_total_block() {
        // Even absurd stacked insulation leaks some heat
        let delta = thermal_exchange(98.6, 32.0, 1.0, 0.9, 60.0);
        assert!(delta < 0.0);
    }

    #[test]
    fn test_larger_gradient_exchanges_disproportionately_faster() {
        let small = thermal_exchange(98.6, 70.0, 0.0, 0.0, 60.0).abs();
        let large = thermal_exchange(98.6, 20.0, 0.0, 0.0, 60.0).abs();
        let gradient_small = (98.6 - 8.4 - 70.0_f32).abs();
        let gradient_large = (98.6 - 8.4 - 20.0_f32).abs();
        // Nonlinear: doubling-plus the gradient more than doubles-plus the flux
        assert!(large / small > gradient_large / gradient_small);
    }

    #[test]
    fn test_band_classification() {
        assert_eq!(TemperatureBand::classify(85.0), TemperatureBand::Freezing);
        assert_eq!(TemperatureBand::classify(94.0), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::classify(97.0), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::classify(98.6), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::classify(101.0), TemperatureBand::Hot);
    }
}
