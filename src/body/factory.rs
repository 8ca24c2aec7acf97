//! Body construction from creation parameters
//!
//! Anatomy is fixed per body plan; the creation info carries the mass
//! figures that feed the metabolic model. Validation fails fast: bad
//! creation parameters are configuration bugs, not runtime conditions.

use serde::{Deserialize, Serialize};

use crate::body::capacity::Capacity;
use crate::body::part::{BodyPart, Organ, PartId};
use crate::body::tree::{attach, Body};
use crate::core::{Result, SimError};

/// Supported anatomies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyPlan {
    Humanoid,
}

impl std::str::FromStr for BodyPlan {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "humanoid" => Ok(BodyPlan::Humanoid),
            other => Err(SimError::UnknownBodyPlan(other.to_string())),
        }
    }
}

/// Parameters for constructing an actor's body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyCreationInfo {
    pub plan: BodyPlan,
    /// Total body mass in kilograms
    pub overall_weight: f32,
    /// Percent of body mass that is fat, 0-100
    pub fat_percent: f32,
    /// Percent of body mass that is muscle, 0-100
    pub muscle_percent: f32,
}

impl BodyCreationInfo {
    pub fn humanoid(overall_weight: f32, fat_percent: f32, muscle_percent: f32) -> Self {
        Self {
            plan: BodyPlan::Humanoid,
            overall_weight,
            fat_percent,
            muscle_percent,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.overall_weight <= 0.0 {
            return Err(SimError::InvalidBodyConfig(format!(
                "overall_weight must be positive, got {}",
                self.overall_weight
            )));
        }
        for (label, pct) in [("fat_percent", self.fat_percent), ("muscle_percent", self.muscle_percent)] {
            if !(0.0..=100.0).contains(&pct) {
                return Err(SimError::InvalidBodyConfig(format!(
                    "{label} must be in 0-100, got {pct}"
                )));
            }
        }
        if self.fat_percent + self.muscle_percent > 100.0 {
            return Err(SimError::InvalidBodyConfig(format!(
                "fat_percent + muscle_percent must not exceed 100, got {}",
                self.fat_percent + self.muscle_percent
            )));
        }
        Ok(())
    }

    pub fn fat_weight(&self) -> f32 {
        self.overall_weight * self.fat_percent / 100.0
    }

    pub fn muscle_weight(&self) -> f32 {
        self.overall_weight * self.muscle_percent / 100.0
    }

    /// Validate and build the body tree
    pub fn build(&self) -> Result<Body> {
        self.validate()?;
        match self.plan {
            BodyPlan::Humanoid => Ok(build_humanoid()),
        }
    }
}

// Part health values, loosely scaled to how much punishment each part
// absorbs before being lost.
const TORSO_HP: f32 = 40.0;
const NECK_HP: f32 = 25.0;
const HEAD_HP: f32 = 25.0;
const JAW_HP: f32 = 10.0;
const RIBCAGE_HP: f32 = 30.0;
const STERNUM_HP: f32 = 20.0;
const SPINE_HP: f32 = 25.0;
const PELVIS_HP: f32 = 25.0;
const CLAVICLE_HP: f32 = 25.0;
const ARM_HP: f32 = 30.0;
const HAND_HP: f32 = 20.0;
const LEG_HP: f32 = 30.0;
const FOOT_HP: f32 = 20.0;

fn build_humanoid() -> Body {
    let mut parts = Vec::new();
    let mut add = |part: BodyPart| -> PartId {
        parts.push(part);
        PartId(parts.len() - 1)
    };

    let torso = add(
        BodyPart::new("Torso", TORSO_HP, true)
            .with_organ(Organ::new("Stomach", false, false).with_capacity(Capacity::Digestion, 1.0))
            .with_organ(Organ::new("Liver", false, true).with_capacity(Capacity::Digestion, 1.0))
            .with_organ(
                Organ::new("Left Kidney", false, false).with_capacity(Capacity::BloodFiltration, 1.0),
            )
            .with_organ(
                Organ::new("Right Kidney", false, false)
                    .with_capacity(Capacity::BloodFiltration, 1.0),
            ),
    );

    let neck = add(BodyPart::new("Neck", NECK_HP, true));
    let head = add(
        BodyPart::new("Head", HEAD_HP, true)
            .with_organ(Organ::new("Brain", false, true).with_capacity(Capacity::Consciousness, 1.0))
            .with_organ(Organ::new("Left Eye", true, false).with_capacity(Capacity::Sight, 1.0))
            .with_organ(Organ::new("Right Eye", true, false).with_capacity(Capacity::Sight, 1.0))
            .with_organ(Organ::new("Left Ear", true, false).with_capacity(Capacity::Hearing, 1.0))
            .with_organ(Organ::new("Right Ear", true, false).with_capacity(Capacity::Hearing, 1.0)),
    );
    let jaw = add(
        BodyPart::new("Jaw", JAW_HP, false)
            .with_capacity(Capacity::Eating, 1.0)
            .with_capacity(Capacity::Talking, 1.0)
            .with_organ(Organ::new("Mouth", true, false).with_capacity(Capacity::Eating, 1.0))
            .with_organ(Organ::new("Tongue", false, false).with_capacity(Capacity::Talking, 1.0)),
    );

    let ribcage = add(
        BodyPart::new("Ribcage", RIBCAGE_HP, true)
            .with_capacity(Capacity::Breathing, 1.0)
            .with_organ(Organ::new("Heart", false, true).with_capacity(Capacity::BloodPumping, 1.0))
            .with_organ(Organ::new("Left Lung", false, false).with_capacity(Capacity::Breathing, 1.0))
            .with_organ(
                Organ::new("Right Lung", false, false).with_capacity(Capacity::Breathing, 1.0),
            ),
    );
    let sternum = add(BodyPart::new("Sternum", STERNUM_HP, false).with_capacity(Capacity::Breathing, 1.0));

    let spine = add(BodyPart::new("Spine", SPINE_HP, false).with_capacity(Capacity::Moving, 1.0));
    let pelvis = add(BodyPart::new("Pelvis", PELVIS_HP, false).with_capacity(Capacity::Moving, 1.0));

    let left_clavicle =
        add(BodyPart::new("Left Clavicle", CLAVICLE_HP, false).with_capacity(Capacity::Manipulation, 1.0));
    let right_clavicle =
        add(BodyPart::new("Right Clavicle", CLAVICLE_HP, false).with_capacity(Capacity::Manipulation, 1.0));
    let left_arm = add(BodyPart::new("Left Arm", ARM_HP, false).with_capacity(Capacity::Manipulation, 1.0));
    let right_arm = add(BodyPart::new("Right Arm", ARM_HP, false).with_capacity(Capacity::Manipulation, 1.0));
    let left_hand = add(BodyPart::new("Left Hand", HAND_HP, false).with_capacity(Capacity::Manipulation, 1.0));
    let right_hand =
        add(BodyPart::new("Right Hand", HAND_HP, false).with_capacity(Capacity::Manipulation, 1.0));

    let left_leg = add(BodyPart::new("Left Leg", LEG_HP, false).with_capacity(Capacity::Moving, 1.0));
    let right_leg = add(BodyPart::new("Right Leg", LEG_HP, false).with_capacity(Capacity::Moving, 1.0));
    let left_foot = add(BodyPart::new("Left Foot", FOOT_HP, false));
    let right_foot = add(BodyPart::new("Right Foot", FOOT_HP, false));

    attach(&mut parts, torso, neck);
    attach(&mut parts, neck, head);
    attach(&mut parts, head, jaw);
    attach(&mut parts, torso, ribcage);
    attach(&mut parts, ribcage, sternum);
    attach(&mut parts, torso, spine);
    attach(&mut parts, torso, pelvis);
    attach(&mut parts, torso, left_clavicle);
    attach(&mut parts, torso, right_clavicle);
    attach(&mut parts, left_clavicle, left_arm);
    attach(&mut parts, right_clavicle, right_arm);
    attach(&mut parts, left_arm, left_hand);
    attach(&mut parts, right_arm, right_hand);
    attach(&mut parts, pelvis, left_leg);
    attach(&mut parts, pelvis, right_leg);
    attach(&mut parts, left_leg, left_foot);
    attach(&mut parts, right_leg, right_foot);

    Body::from_arena(parts, torso)
}
