//! Error type for the codec.

/// Error type for SMD code decoding and resistance formatting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SmdError {
    /// The input did not decode as any known marking scheme.
    ///
    /// Carries the original (untrimmed) input for diagnostics.
    #[error("invalid SMD code {code:?}: {reason}")]
    InvalidCode { code: String, reason: String },

    /// Formatting was requested for a negative resistance.
    #[error("resistance must be non-negative, got {0}")]
    InvalidValue(f64),
}

impl SmdError {
    pub(crate) fn invalid_code(code: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCode {
            code: code.to_string(),
            reason: reason.into(),
        }
    }
}
