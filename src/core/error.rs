use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid body configuration: {0}")]
    InvalidBodyConfig(String),

    #[error("Unknown body plan: {0}")]
    UnknownBodyPlan(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
