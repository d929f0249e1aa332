/// Convenience result type used across skyshow.
pub type ShowResult<T> = Result<T, ShowError>;

/// Top-level error taxonomy used by converter APIs.
#[derive(thiserror::Error, Debug)]
pub enum ShowError {
    /// Invalid user-provided data or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A sample would break the time ordering of a trajectory or light code.
    #[error("ordering error: {0}")]
    Ordering(String),

    /// Trajectory and light-code maps do not name the same drones.
    #[error("mismatched drones: {0}")]
    MismatchedDrones(String),

    /// A color channel outside of `[0, 255]` (or not an integer).
    #[error("value out of range: {0}")]
    ValueRange(String),

    /// No external compiler could be resolved.
    #[error("external tool missing: {0}")]
    ExternalToolMissing(String),

    /// The external compiler ran but did not produce an artifact.
    #[error("compile error: {0}")]
    Compile(String),

    /// Errors when serializing or deserializing show documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem or process IO, propagated as-is.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ShowError {
    /// Build a [`ShowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShowError::Ordering`] value.
    pub fn ordering(msg: impl Into<String>) -> Self {
        Self::Ordering(msg.into())
    }

    /// Build a [`ShowError::MismatchedDrones`] value.
    pub fn mismatched_drones(msg: impl Into<String>) -> Self {
        Self::MismatchedDrones(msg.into())
    }

    /// Build a [`ShowError::ValueRange`] value.
    pub fn value_range(msg: impl Into<String>) -> Self {
        Self::ValueRange(msg.into())
    }

    /// Build a [`ShowError::ExternalToolMissing`] value.
    pub fn tool_missing(msg: impl Into<String>) -> Self {
        Self::ExternalToolMissing(msg.into())
    }

    /// Build a [`ShowError::Compile`] value.
    pub fn compile(msg: impl Into<String>) -> Self {
        Self::Compile(msg.into())
    }

    /// Build a [`ShowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ShowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
