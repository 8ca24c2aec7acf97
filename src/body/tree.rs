//! Body tree: damage and healing by recursive random descent
//!
//! Damage entering a part with live children flips a coin: apply here, or
//! forward to one uniformly chosen child, where the same rule repeats. A
//! part destroyed at zero health detaches from its parent; if it was vital,
//! destruction cascades up through every vital ancestor.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::body::capacity::{aggregate, capacity_sources, Capacity};
use crate::body::part::{BodyPart, PartId};

/// Flavor of incoming damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageType {
    Cut,
    Pierce,
    Blunt,
    Burn,
    Frost,
}

/// Damage request from a collaborator (combat, events, environment)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageInfo {
    pub amount: f32,
    pub damage_type: DamageType,
    /// Penetrating hits can reach internal organs
    pub penetrating: bool,
    /// Aimed damage skips the random descent
    pub target_part: Option<String>,
}

impl DamageInfo {
    pub fn new(amount: f32, damage_type: DamageType) -> Self {
        Self {
            amount,
            damage_type,
            penetrating: false,
            target_part: None,
        }
    }

    pub fn penetrating(mut self) -> Self {
        self.penetrating = true;
        self
    }

    pub fn aimed_at(mut self, part: impl Into<String>) -> Self {
        self.target_part = Some(part.into());
        self
    }
}

/// Quality of applied treatment, scales the healed amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealingQuality {
    Crude,
    Standard,
    Expert,
}

impl HealingQuality {
    pub fn multiplier(&self) -> f32 {
        match self {
            HealingQuality::Crude => 0.5,
            HealingQuality::Standard => 1.0,
            HealingQuality::Expert => 1.5,
        }
    }
}

/// Healing request from a collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealingInfo {
    pub amount: f32,
    pub quality: HealingQuality,
    pub target_part: Option<String>,
}

impl HealingInfo {
    pub fn new(amount: f32, quality: HealingQuality) -> Self {
        Self {
            amount,
            quality,
            target_part: None,
        }
    }

    pub fn aimed_at(mut self, part: impl Into<String>) -> Self {
        self.target_part = Some(part.into());
        self
    }
}

/// A complete body: arena of parts plus the root id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    parts: Vec<BodyPart>,
    root: PartId,
}

impl Body {
    /// Assemble a body from an arena and root index.
    ///
    /// The factory is the normal entry point; this is exposed for tests
    /// that need hand-built trees.
    pub fn from_arena(parts: Vec<BodyPart>, root: PartId) -> Self {
        Self { parts, root }
    }

    pub fn root(&self) -> PartId {
        self.root
    }

    pub fn part(&self, id: PartId) -> &BodyPart {
        &self.parts[id.0]
    }

    pub fn part_mut(&mut self, id: PartId) -> &mut BodyPart {
        &mut self.parts[id.0]
    }

    pub fn parts(&self) -> &[BodyPart] {
        &self.parts
    }

    /// Find a part by exact name
    pub fn find_part(&self, name: &str) -> Option<PartId> {
        self.parts
            .iter()
            .position(|p| p.name == name)
            .map(PartId)
    }

    /// Display name qualified by the parent chain, root to leaf:
    /// "Torso's Left Arm's Left Hand"
    pub fn qualified_name(&self, id: PartId) -> String {
        let mut chain = vec![self.parts[id.0].name.as_str()];
        let mut cursor = self.parts[id.0].parent;
        while let Some(pid) = cursor {
            chain.push(self.parts[pid.0].name.as_str());
            cursor = self.parts[pid.0].parent;
        }
        chain.reverse();
        chain.join("'s ")
    }

    /// Apply damage, either aimed or by random descent from the root.
    ///
    /// Returns display messages for every part hit or destroyed.
    pub fn damage(&mut self, info: &DamageInfo, rng: &mut impl Rng) -> Vec<String> {
        let mut messages = Vec::new();
        let target = match &info.target_part {
            Some(name) => match self.find_part(name) {
                Some(id) => id,
                None => {
                    tracing::warn!(part = %name, "damage aimed at unknown part, ignoring");
                    return messages;
                }
            },
            None => self.descend(rng),
        };
        self.apply_damage(target, info, rng, &mut messages);
        messages
    }

    /// Apply healing by the same descent policy. Destroyed parts are
    /// skipped: destruction is irreversible.
    pub fn heal(&mut self, info: &HealingInfo, rng: &mut impl Rng) -> Vec<String> {
        let mut messages = Vec::new();
        let target = match &info.target_part {
            Some(name) => match self.find_part(name) {
                Some(id) => id,
                None => {
                    tracing::warn!(part = %name, "healing aimed at unknown part, ignoring");
                    return messages;
                }
            },
            None => self.descend(rng),
        };
        let amount = info.amount * info.quality.multiplier();
        let part = &mut self.parts[target.0];
        if part.destroyed {
            return messages;
        }
        let before = part.health;
        part.health = (part.health + amount).min(part.max_health);
        let gained = part.health - before;
        if gained > 0.0 {
            messages.push(format!(
                "{} recovers {:.0} health",
                self.qualified_name(target),
                gained
            ));
        }
        messages
    }

    /// Environmental damage (frostbite, burns) hits the named part in
    /// place: no descent, and only external organs are eligible.
    pub fn damage_environmental(&mut self, part_name: &str, amount: f32) -> Vec<String> {
        let mut messages = Vec::new();
        let Some(id) = self.find_part(part_name) else {
            tracing::debug!(part = %part_name, "environmental damage on unknown part, ignoring");
            return messages;
        };
        if self.parts[id.0].destroyed {
            return messages;
        }
        let ratio_loss = amount / self.parts[id.0].max_health;
        for organ in &mut self.parts[id.0].organs {
            if organ.external {
                organ.damage(ratio_loss);
            }
        }
        self.reduce_health(id, amount, &mut messages);
        messages
    }

    /// Mean health ratio across the whole arena; destroyed parts count as
    /// zero, so lost limbs permanently lower the figure.
    pub fn overall_health(&self) -> f32 {
        if self.parts.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.parts.iter().map(|p| p.health_ratio()).sum();
        sum / self.parts.len() as f32
    }

    /// Compute a capacity from part and organ condition.
    ///
    /// Dispatches on the capacity's source table: name-fragment matching
    /// over the flattened arena, then min/average/single-part aggregation.
    /// Destroyed parts still count (at zero), which is what makes one lost
    /// leg zero out Moving.
    pub fn capacity(&self, capacity: Capacity) -> f32 {
        let (strategy, fragments) = capacity_sources(capacity);
        let mut terms = Vec::new();
        for part in &self.parts {
            if fragments.iter().any(|f| part.name.contains(f)) {
                terms.push(weight_for(&part.capacity_weights, capacity) * part.health_ratio());
            }
            for organ in &part.organs {
                if fragments.iter().any(|f| organ.name.contains(f)) {
                    let ratio = if part.destroyed { 0.0 } else { organ.condition };
                    terms.push(weight_for(&organ.capacity_weights, capacity) * ratio);
                }
            }
        }
        aggregate(strategy, &terms)
    }

    /// Is the root part (and therefore the actor) gone?
    pub fn is_destroyed(&self) -> bool {
        self.parts[self.root.0].destroyed
    }

    // Walk from the root: coin-flip at every part with live children.
    fn descend(&self, rng: &mut impl Rng) -> PartId {
        let mut cursor = self.root;
        loop {
            let part = &self.parts[cursor.0];
            if part.children.is_empty() || rng.gen_bool(0.5) {
                return cursor;
            }
            let idx = rng.gen_range(0..part.children.len());
            cursor = part.children[idx];
        }
    }

    fn apply_damage(
        &mut self,
        id: PartId,
        info: &DamageInfo,
        rng: &mut impl Rng,
        messages: &mut Vec<String>,
    ) {
        if self.parts[id.0].destroyed {
            return;
        }
        let name = self.qualified_name(id);
        messages.push(format!("{} takes {:.0} damage", name, info.amount));

        // Penetrating hits bleed into one random organ
        if info.penetrating && !self.parts[id.0].organs.is_empty() {
            let organ_idx = rng.gen_range(0..self.parts[id.0].organs.len());
            let ratio_loss = info.amount / self.parts[id.0].max_health;
            let (organ_name, organ_gone, organ_vital) = {
                let organ = &mut self.parts[id.0].organs[organ_idx];
                organ.damage(ratio_loss);
                (organ.name.clone(), organ.is_destroyed(), organ.vital)
            };
            if organ_gone {
                messages.push(format!("{}'s {} is ruined", name, organ_name));
                if organ_vital {
                    self.destroy(id, messages);
                    return;
                }
            }
        }

        self.reduce_health(id, info.amount, messages);
    }

    fn reduce_health(&mut self, id: PartId, amount: f32, messages: &mut Vec<String>) {
        let part = &mut self.parts[id.0];
        part.health = (part.health - amount).max(0.0);
        if part.health <= 0.0 {
            self.destroy(id, messages);
        }
    }

    fn destroy(&mut self, id: PartId, messages: &mut Vec<String>) {
        if self.parts[id.0].destroyed {
            return;
        }
        messages.push(format!("{} is destroyed!", self.qualified_name(id)));
        self.parts[id.0].destroyed = true;
        self.parts[id.0].health = 0.0;

        // Detach from the parent's live children
        if let Some(parent) = self.parts[id.0].parent {
            self.parts[parent.0].children.retain(|c| *c != id);
            // Vital parts take their parent with them
            if self.parts[id.0].vital {
                self.destroy(parent, messages);
            }
        }
    }
}

fn weight_for(weights: &[(Capacity, f32)], capacity: Capacity) -> f32 {
    weights
        .iter()
        .find(|(c, _)| *c == capacity)
        .map(|(_, w)| *w)
        .unwrap_or(1.0)
}

/// Attach `child` under `parent` in an arena under construction
pub fn attach(parts: &mut [BodyPart], parent: PartId, child: PartId) {
    parts[child.0].parent = Some(parent);
    parts[parent.0].children.push(child);
}
