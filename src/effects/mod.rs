pub mod catalog;
pub mod effect;
pub mod registry;

pub use effect::{Effect, EffectKind, StackPolicy};
pub use registry::EffectRegistry;
