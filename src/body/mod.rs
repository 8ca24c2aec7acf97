pub mod capacity;
pub mod factory;
pub mod part;
pub mod tree;

pub use capacity::{Aggregation, Capacity};
pub use factory::{BodyCreationInfo, BodyPlan};
pub use part::{BodyPart, Organ, PartId};
pub use tree::{Body, DamageInfo, DamageType, HealingInfo, HealingQuality};
