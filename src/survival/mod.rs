pub mod constants;
pub mod data;
pub mod processor;
pub mod result;
pub mod thermal;

pub use data::{SurvivalData, SurvivalDelta};
pub use processor::{process, sleep};
pub use result::SurvivalResult;
pub use thermal::TemperatureBand;
