//! Output envelope of the survival processor

use serde::{Deserialize, Serialize};

use crate::effects::effect::Effect;
use crate::survival::data::SurvivalData;

/// Everything a Process/Sleep call produces.
///
/// The processor has no other output channel: it never logs, prints, or
/// mutates shared state. Callers render the messages and feed the
/// effects to the actor's registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurvivalResult {
    pub data: SurvivalData,
    pub effects: Vec<Effect>,
    pub messages: Vec<String>,
}

impl SurvivalResult {
    /// Identity result: unchanged data, nothing generated
    pub fn unchanged(data: &SurvivalData) -> Self {
        Self {
            data: data.clone(),
            effects: Vec::new(),
            messages: Vec::new(),
        }
    }
}
