//! Error types for Afisz.

use thiserror::Error;

/// Primary error type for all Afisz operations.
///
/// Every failure path in the crate converges to this type before reaching
/// the caller, which branches on [`AfiszError::status_code`] when mapping
/// to an HTTP response.
#[derive(Error, Debug)]
pub enum AfiszError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid event draft: {0}")]
    InvalidDraft(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Upstream service error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Model contract violation: {0}")]
    Contract(String),
}

impl AfiszError {
    /// HTTP-style status carried by this error.
    ///
    /// Transient and contract failures all report 503: from the caller's
    /// point of view the model breaking its own output contract is an
    /// infrastructure fault, not a client input problem.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Configuration(_) => 401,
            Self::InvalidDraft(_) => 400,
            Self::Api { status, .. } => *status,
            Self::Upstream { .. } | Self::Network(_) | Self::Timeout(_) | Self::Contract(_) => 503,
        }
    }

    /// Whether this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Upstream { .. } | Self::Network(_) | Self::Timeout(_)
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, AfiszError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(AfiszError::Configuration("bad key".into()).status_code(), 401);
        assert_eq!(AfiszError::InvalidDraft("too long".into()).status_code(), 400);
        assert_eq!(
            AfiszError::Api {
                status: 422,
                message: "unprocessable".into()
            }
            .status_code(),
            422
        );
        assert_eq!(
            AfiszError::Upstream {
                status: 500,
                message: "boom".into()
            }
            .status_code(),
            503
        );
        assert_eq!(AfiszError::Timeout(30_000).status_code(), 503);
        assert_eq!(AfiszError::Contract("oversized".into()).status_code(), 503);
    }

    #[test]
    fn only_transient_errors_are_retryable() {
        assert!(AfiszError::Upstream {
            status: 502,
            message: "bad gateway".into()
        }
        .is_retryable());
        assert!(AfiszError::Timeout(30_000).is_retryable());

        assert!(!AfiszError::Configuration("bad key".into()).is_retryable());
        assert!(!AfiszError::Api {
            status: 400,
            message: "bad request".into()
        }
        .is_retryable());
        assert!(!AfiszError::Contract("not json".into()).is_retryable());
    }
}
