use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
/// Postmark API error code (`ErrorCode`).
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct ErrorCode(i64);

impl ErrorCode {
    /// Construct an error code from its integer representation.
    pub fn new(code: i64) -> Self {
        Self(code)
    }

    /// Get the integer code as reported by Postmark.
    pub fn as_i64(self) -> i64 {
        self.0
    }

    /// Returns `true` for the zero code Postmark reports on success payloads.
    pub fn is_ok(self) -> bool {
        self.0 == 0
    }

    /// Map this code to a known error code variant, if one exists.
    pub fn known_kind(self) -> Option<KnownErrorCode> {
        KnownErrorCode::from_code(self.0)
    }

    /// Returns `true` if this code is considered retryable by the crate.
    pub fn is_retryable(self) -> bool {
        matches!(
            self.known_kind(),
            Some(kind) if kind.is_retryable()
        )
    }

    /// Returns `true` if this code represents an authentication/authorization error.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self.known_kind(),
            Some(kind) if kind.is_auth_error()
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known Postmark API error codes supported by this crate.
///
/// Unknown codes are preserved as [`ErrorCode`] and return `None` from
/// [`KnownErrorCode::from_code`].
pub enum KnownErrorCode {
    BadOrMissingApiToken,
    Maintenance,
    InvalidEmailRequest,
    SenderSignatureNotFound,
    SenderSignatureNotConfirmed,
    NotAllowedToSend,
    InactiveRecipient,
}

impl KnownErrorCode {
    /// Convert a raw Postmark integer code into a known variant.
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            10 => Self::BadOrMissingApiToken,
            100 => Self::Maintenance,
            300 => Self::InvalidEmailRequest,
            401 => Self::SenderSignatureNotFound,
            402 => Self::SenderSignatureNotConfirmed,
            405 => Self::NotAllowedToSend,
            406 => Self::InactiveRecipient,
            _ => return None,
        })
    }

    /// Whether this code is likely transient and can be retried.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::Maintenance)
    }

    /// Whether this code indicates invalid/expired credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::BadOrMissingApiToken)
    }
}
