//! Claims validation for session tokens
//!
//! Validation settings travel with each call instead of living in process
//! state, so a refresh that ignores expiry never affects a concurrent parse.

use crate::claims::Claims;
use crate::error::Rejection;
use crate::limits::MAX_LEEWAY_SECONDS;
use crate::utils::bounds::apply_leeway;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current time for temporal claim checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// The system wall clock
    #[default]
    System,

    /// A fixed Unix timestamp in seconds
    Fixed(i64),
}

impl Clock {
    /// Current Unix timestamp according to this clock
    pub fn now(&self) -> i64 {
        match self {
            Clock::System => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
                .unwrap_or(0),
            Clock::Fixed(timestamp) => *timestamp,
        }
    }
}

/// Configuration for claims validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    validate_exp: bool,
    validate_nbf: bool,
    validate_iat: bool,
    leeway_seconds: u64,
    required_issuer: Option<String>,
    clock: Clock,
}

impl Default for Validation {
    fn default() -> Self {
        Self {
            validate_exp: true,
            validate_nbf: true,
            validate_iat: true,
            leeway_seconds: 0,
            required_issuer: None,
            clock: Clock::System,
        }
    }
}

impl Validation {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings used when refreshing: signature, `iat` and issuer still
    /// count, `exp` and `nbf` do not
    ///
    /// A token claiming to be issued in the future is refused on refresh as
    /// well, since the renewed token keeps its `iat` and would never parse.
    pub fn for_refresh() -> Self {
        Self::default().no_exp_validation().no_nbf_validation()
    }

    /// Set tolerated clock skew in seconds
    ///
    /// Values above [`MAX_LEEWAY_SECONDS`] are clamped to it.
    pub fn leeway(mut self, seconds: u64) -> Self {
        self.leeway_seconds = seconds.min(MAX_LEEWAY_SECONDS);
        self
    }

    /// Require the `iss` claim to equal `issuer`
    pub fn require_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.required_issuer = Some(issuer.into());
        self
    }

    /// Evaluate temporal claims against `clock`
    pub fn at(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Disable expiration validation
    pub fn no_exp_validation(mut self) -> Self {
        self.validate_exp = false;
        self
    }

    /// Disable not-before validation
    pub fn no_nbf_validation(mut self) -> Self {
        self.validate_nbf = false;
        self
    }

    /// Disable issued-at validation
    pub fn no_iat_validation(mut self) -> Self {
        self.validate_iat = false;
        self
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn leeway_seconds(&self) -> u64 {
        self.leeway_seconds
    }

    pub fn required_issuer(&self) -> Option<&str> {
        self.required_issuer.as_deref()
    }
}

/// Validate claims according to configuration
///
/// Only called on claims whose signature has already been verified.
pub(crate) fn validate_claims(claims: &Claims, config: &Validation) -> Result<(), Rejection> {
    let now = config.clock.now();

    // A token is expired from the second named by `exp` onwards
    if config.validate_exp {
        if let Some(exp) = claims.expires_at {
            let exp_with_leeway = apply_leeway(exp, config.leeway_seconds, true);
            if now >= exp_with_leeway {
                return Err(Rejection::Expired {
                    expired_at: exp,
                    now,
                });
            }
        }
    }

    if config.validate_nbf {
        if let Some(nbf) = claims.not_before {
            let nbf_with_leeway = apply_leeway(nbf, config.leeway_seconds, false);
            if now < nbf_with_leeway {
                return Err(Rejection::NotYetValid {
                    not_before: nbf,
                    now,
                });
            }
        }
    }

    if config.validate_iat {
        if let Some(iat) = claims.issued_at {
            let now_with_leeway = apply_leeway(now, config.leeway_seconds, true);
            if iat > now_with_leeway {
                return Err(Rejection::IssuedInFuture { issued_at: iat, now });
            }
        }
    }

    if let Some(expected) = &config.required_issuer {
        if claims.issuer.as_deref() != Some(expected.as_str()) {
            return Err(Rejection::IssuerMismatch {
                expected: expected.clone(),
                found: claims.issuer.clone(),
            });
        }
    }

    Ok(())
}
