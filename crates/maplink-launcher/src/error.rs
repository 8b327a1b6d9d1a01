use maplink_core::ValidationError;
use thiserror::Error;

/// Failure reported by a host capability (probe or launch).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HostError(pub String);

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("invalid location request: {0}")]
    Validation(#[from] ValidationError),

    /// The host refused or failed to launch the link.
    #[error(transparent)]
    Launch(#[from] HostError),
}
