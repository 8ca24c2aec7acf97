//! Physiological state evolved by the survival processor

use serde::{Deserialize, Serialize};

use crate::body::factory::BodyCreationInfo;
use crate::survival::constants::MAX_ENERGY_MINUTES;

/// An actor's physiological state at one instant
///
/// Invariants: calories, hydration and energy never go negative, and
/// `fat_weight + muscle_weight <= body_weight` (enforced at creation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurvivalData {
    pub calories: f32,
    pub max_calories: f32,
    pub hydration: f32,
    pub max_hydration: f32,
    /// Minutes of wakefulness banked
    pub energy: f32,
    /// Core body temperature, degF
    pub temperature: f32,
    /// Natural insulation, 0-1
    pub cold_resistance: f32,
    pub body_weight: f32,
    pub muscle_weight: f32,
    pub fat_weight: f32,
    /// Body-derived health fraction, fed in by the owning actor
    pub health_percent: f32,
    /// Worn insulation, 0-0.95
    pub equipment_insulation: f32,
    /// Ambient temperature, degF
    pub environment_temp: f32,
    /// Metabolic multiplier: 0.5 sleeping, 1.0 walking, 2.0+ hard labor
    pub activity_level: f32,
    pub is_player: bool,
}

impl SurvivalData {
    /// Well-fed state at rest in a mild environment
    pub fn new(body_weight: f32, muscle_weight: f32, fat_weight: f32) -> Self {
        Self {
            calories: 2000.0,
            max_calories: 2000.0,
            hydration: 100.0,
            max_hydration: 100.0,
            energy: MAX_ENERGY_MINUTES,
            temperature: 98.6,
            cold_resistance: 0.0,
            body_weight,
            muscle_weight,
            fat_weight,
            health_percent: 1.0,
            equipment_insulation: 0.0,
            environment_temp: 68.0,
            activity_level: 1.0,
            is_player: false,
        }
    }

    pub fn from_creation(info: &BodyCreationInfo) -> Self {
        Self::new(info.overall_weight, info.muscle_weight(), info.fat_weight())
    }

    pub fn calories_fraction(&self) -> f32 {
        if self.max_calories <= 0.0 {
            return 0.0;
        }
        (self.calories / self.max_calories).clamp(0.0, 1.0)
    }

    pub fn hydration_fraction(&self) -> f32 {
        if self.max_hydration <= 0.0 {
            return 0.0;
        }
        (self.hydration / self.max_hydration).clamp(0.0, 1.0)
    }

    /// Eat: calories added, clamped at the tank size
    pub fn feed(&mut self, kcal: f32) {
        self.calories = (self.calories + kcal).min(self.max_calories);
    }

    /// Drink: hydration added, clamped at the tank size
    pub fn drink(&mut self, amount: f32) {
        self.hydration = (self.hydration + amount).min(self.max_hydration);
    }
}

/// Per-minute survival deltas, the currency of effects
///
/// Stored pre-severity on an effect; scaled by severity and elapsed
/// minutes when applied.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurvivalDelta {
    pub calories: f32,
    pub hydration: f32,
    pub temperature: f32,
    pub energy: f32,
}

impl SurvivalDelta {
    pub const ZERO: SurvivalDelta = SurvivalDelta {
        calories: 0.0,
        hydration: 0.0,
        temperature: 0.0,
        energy: 0.0,
    };

    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            calories: self.calories * factor,
            hydration: self.hydration * factor,
            temperature: self.temperature * factor,
            energy: self.energy * factor,
        }
    }

    /// Apply to survival data, preserving the non-negative floors
    pub fn apply_to(&self, data: &mut SurvivalData) {
        data.calories = (data.calories + self.calories).clamp(0.0, data.max_calories);
        data.hydration = (data.hydration + self.hydration).clamp(0.0, data.max_hydration);
        data.energy = (data.energy + self.energy).clamp(0.0, MAX_ENERGY_MINUTES);
        data.temperature += self.temperature;
    }
}

impl std::ops::Add for SurvivalDelta {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            hydration: self.hydration + rhs.hydration,
            temperature: self.temperature + rhs.temperature,
            energy: self.energy + rhs.energy,
        }
    }
}

impl std::ops::AddAssign for SurvivalDelta {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
