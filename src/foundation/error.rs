/// Convenience result type used across settle.
pub type SettleResult<T> = Result<T, SettleError>;

/// Top-level error taxonomy used by settle APIs.
///
/// Scanning never fails: malformed style values fall back to zero. Errors only come from the
/// strict parsing helper, tree loading, and the completion notifier.
#[derive(thiserror::Error, Debug)]
pub enum SettleError {
    /// Invalid user-provided input (unreadable files, bad tree data).
    #[error("validation error: {0}")]
    Validation(String),

    /// A time value could not be parsed by the strict parser.
    #[error("parse error: {0}")]
    Parse(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// No async runtime was available to schedule the completion timer.
    #[error("runtime error: {0}")]
    Runtime(String),

    /// The pending completion was cancelled before its timer fired.
    #[error("completion cancelled")]
    Cancelled,

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SettleError {
    /// Build a [`SettleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SettleError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`SettleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`SettleError::Runtime`] value.
    pub fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    /// Return `true` for [`SettleError::Cancelled`].
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
