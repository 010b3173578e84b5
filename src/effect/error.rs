//! Error types for the effect instances.
//!
//! These describe failures of an *effect*, never outcomes of a computation.
//! Turning one into an outcome is an explicit step, usually
//! [`IO::catch_unwind`](crate::effect::IO::catch_unwind) followed by
//! [`attempt_with_effect`](crate::computation::Computation::attempt_with_effect).

/// Represents errors raised while running an effect.
///
/// # Examples
///
/// ```rust
/// use bailout::effect::EffectError;
///
/// let error = EffectError::Panicked {
///     message: "index out of bounds".to_string(),
/// };
/// assert_eq!(format!("{error}"), "effect panicked: index out of bounds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    /// The action panicked; `message` is the panic payload if it was a string.
    Panicked {
        /// The panic message, or a placeholder for non-string payloads.
        message: String,
    },
}

impl EffectError {
    /// Builds a [`EffectError::Panicked`] from a payload returned by
    /// [`std::panic::catch_unwind`].
    pub(crate) fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self::Panicked { message }
    }
}

impl std::fmt::Display for EffectError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Panicked { message } => write!(formatter, "effect panicked: {message}"),
        }
    }
}

impl std::error::Error for EffectError {}
