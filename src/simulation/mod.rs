pub mod actor;
pub mod tick;

pub use actor::Actor;
pub use tick::{sleep_tick, tick, ActorEvent, TickOutcome};
