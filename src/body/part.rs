//! Body parts and organs
//!
//! Parts live in an arena owned by `Body`; the tree is expressed with
//! `PartId` indices. The parent link is a plain index, not an owning
//! reference, so there is no cycle between owner and owned.

use serde::{Deserialize, Serialize};

use crate::body::capacity::Capacity;

/// Index of a part in its body's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartId(pub usize);

/// A node in the body tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPart {
    pub name: String,
    pub max_health: f32,
    pub health: f32,
    /// Destroying a vital part destroys its parent
    pub vital: bool,
    pub parent: Option<PartId>,
    /// Live children; destroyed parts are detached from this list
    pub children: Vec<PartId>,
    pub organs: Vec<Organ>,
    /// Named capacities this part contributes to, with per-part weight
    pub capacity_weights: Vec<(Capacity, f32)>,
    pub destroyed: bool,
}

impl BodyPart {
    pub fn new(name: impl Into<String>, max_health: f32, vital: bool) -> Self {
        Self {
            name: name.into(),
            max_health,
            health: max_health,
            vital,
            parent: None,
            children: Vec::new(),
            organs: Vec::new(),
            capacity_weights: Vec::new(),
            destroyed: false,
        }
    }

    pub fn with_capacity(mut self, capacity: Capacity, weight: f32) -> Self {
        self.capacity_weights.push((capacity, weight));
        self
    }

    pub fn with_organ(mut self, organ: Organ) -> Self {
        self.organs.push(organ);
        self
    }

    /// Health as a 0.0-1.0 ratio
    pub fn health_ratio(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// An organ attached to a part
///
/// Condition is 0.0-1.0. External organs (eyes, ears) can be targeted by
/// environmental damage directly; internal ones only through penetration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organ {
    pub name: String,
    pub condition: f32,
    pub external: bool,
    /// Destroying a vital organ destroys the owning part
    pub vital: bool,
    pub capacity_weights: Vec<(Capacity, f32)>,
}

impl Organ {
    pub fn new(name: impl Into<String>, external: bool, vital: bool) -> Self {
        Self {
            name: name.into(),
            condition: 1.0,
            external,
            vital,
            capacity_weights: Vec::new(),
        }
    }

    pub fn with_capacity(mut self, capacity: Capacity, weight: f32) -> Self {
        self.capacity_weights.push((capacity, weight));
        self
    }

    pub fn damage(&mut self, amount: f32) {
        self.condition = (self.condition - amount).max(0.0);
    }

    pub fn is_destroyed(&self) -> bool {
        self.condition <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_ratio_clamps() {
        let mut part = BodyPart::new("Torso", 40.0, true);
        part.health = 20.0;
        assert_eq!(part.health_ratio(), 0.5);
        part.health = -5.0;
        assert_eq!(part.health_ratio(), 0.0);
    }

    #[test]
    fn test_organ_damage_floors_at_zero() {
        let mut organ = Organ::new("Heart", false, true);
        organ.damage(0.6);
        assert!((organ.condition - 0.4).abs() < 1e-6);
        organ.damage(1.0);
        assert_eq!(organ.condition, 0.0);
        assert!(organ.is_destroyed());
    }
}
