//! Errors for jwtsession
//!
//! Validation first produces a [`Rejection`], the precise low-level reason a
//! token was refused. Callers see the classified [`Error`], which collapses
//! every rejection into one of four token kinds so middleware can react to
//! the kind without inspecting details.

use thiserror::Error;

/// Token segment a format rejection refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Header,
    Payload,
    Signature,
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Header => write!(f, "header"),
            Segment::Payload => write!(f, "payload"),
            Segment::Signature => write!(f, "signature"),
        }
    }
}

/// Low-level reason a token failed validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    // ============================================================================
    // Format
    // ============================================================================
    #[error("token too large: {size} bytes (maximum: {max} bytes)")]
    TooLarge { size: usize, max: usize },

    #[error("expected three parts separated by '.', found {0}")]
    PartCount(usize),

    #[error("{segment} is not valid Base64URL: {reason}")]
    Base64 { segment: Segment, reason: String },

    #[error("{segment} is not valid JSON: {reason}")]
    Json { segment: Segment, reason: String },

    // ============================================================================
    // Algorithm and signature
    // ============================================================================
    #[error("the 'none' algorithm is rejected")]
    AlgorithmNone,

    #[error("algorithm '{0}' is not supported")]
    AlgorithmUnsupported(String),

    #[error("signature does not match")]
    SignatureMismatch,

    // ============================================================================
    // Claims
    // ============================================================================
    #[error("expired at {expired_at} (now: {now})")]
    Expired { expired_at: i64, now: i64 },

    #[error("not valid until {not_before} (now: {now})")]
    NotYetValid { not_before: i64, now: i64 },

    #[error("issued in future at {issued_at} (now: {now})")]
    IssuedInFuture { issued_at: i64, now: i64 },

    #[error("issuer mismatch: expected '{expected}', found {found:?}")]
    IssuerMismatch {
        expected: String,
        found: Option<String>,
    },
}

/// jwtsession errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("token is malformed: {0}")]
    TokenMalformed(Rejection),

    #[error("token is invalid: {0}")]
    TokenInvalid(Rejection),

    #[error("token expired at {expired_at} (now: {now})")]
    TokenExpired { expired_at: i64, now: i64 },

    #[error("token not valid until {not_before} (now: {now})")]
    TokenNotValidYet { not_before: i64, now: i64 },

    #[error("failed to encode token: {0}")]
    Encoding(String),
}

impl Error {
    /// Whether the token failed only because its expiry has passed
    ///
    /// Such a token is still authentic and can be passed to
    /// [`Signer::refresh_token`](crate::Signer::refresh_token).
    pub fn is_expired(&self) -> bool {
        matches!(self, Error::TokenExpired { .. })
    }

    /// The underlying rejection for malformed and invalid tokens
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Error::TokenMalformed(rejection) | Error::TokenInvalid(rejection) => Some(rejection),
            _ => None,
        }
    }
}

impl From<Rejection> for Error {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::TooLarge { .. }
            | Rejection::PartCount(_)
            | Rejection::Base64 { .. }
            | Rejection::Json { .. } => Error::TokenMalformed(rejection),
            Rejection::Expired { expired_at, now } => Error::TokenExpired { expired_at, now },
            Rejection::NotYetValid { not_before, now } => {
                Error::TokenNotValidYet { not_before, now }
            }
            Rejection::AlgorithmNone
            | Rejection::AlgorithmUnsupported(_)
            | Rejection::SignatureMismatch
            | Rejection::IssuedInFuture { .. }
            | Rejection::IssuerMismatch { .. } => Error::TokenInvalid(rejection),
        }
    }
}

/// Result type alias for jwtsession operations
pub type Result<T> = std::result::Result<T, Error>;
