/// Convenience result type used across Comet.
pub type CometResult<T> = Result<T, CometError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Media failures are always recovered per-item by the composite builder;
/// they surface here only from loader implementations.
#[derive(thiserror::Error, Debug)]
pub enum CometError {
    /// Invalid user-provided or geometry/timing data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors on the host messaging channel (request, publish, payload).
    #[error("channel error: {0}")]
    Channel(String),

    /// Errors while probing or loading a media source.
    #[error("media error: {0}")]
    Media(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CometError {
    /// Build a [`CometError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CometError::Channel`] value.
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    /// Build a [`CometError::Media`] value.
    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
