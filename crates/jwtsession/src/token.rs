//! Token parsing pipeline
//!
//! ```text
//! &str
//!     │ ParsedToken::parse()      structure, Base64URL, JSON
//!     ▼
//! ParsedToken
//!     │ .verify(secret)           algorithm, HMAC signature
//!     ▼
//! VerifiedToken
//!     │ .validate(&Validation)    exp, nbf, iat, iss
//!     ▼
//! Claims
//! ```
//!
//! Claims only leave the pipeline through a `VerifiedToken`, so nothing
//! decoded from the payload is trusted before the signature checks out.

use crate::algorithm::{ensure_hs256, verify_hs256};
use crate::claims::Claims;
use crate::error::{Rejection, Segment};
use crate::header::TokenHeader;
use crate::limits::{MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_TOKEN_LENGTH};
use crate::utils::base64url;
use crate::validation::{Validation, validate_claims};

/// A token split and decoded, but not yet verified
pub(crate) struct ParsedToken<'a> {
    signing_input: &'a str,
    signature_b64: &'a str,
    header: TokenHeader,
    claims: Claims,
}

impl<'a> ParsedToken<'a> {
    /// Split a compact token and decode its header and payload
    pub(crate) fn parse(token: &'a str) -> Result<Self, Rejection> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Rejection::TooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        let parts = token.split('.').count();
        if parts != 3 {
            return Err(Rejection::PartCount(parts));
        }

        // Three parts guarantee two dots
        let (signing_input, signature_b64) = token
            .rsplit_once('.')
            .ok_or(Rejection::PartCount(parts))?;
        let (header_b64, payload_b64) = signing_input
            .split_once('.')
            .ok_or(Rejection::PartCount(parts))?;

        let header_json =
            base64url::decode_string(header_b64, MAX_DECODED_HEADER_SIZE, Segment::Header)?;
        let header: TokenHeader =
            miniserde::json::from_str(&header_json).map_err(|e| Rejection::Json {
                segment: Segment::Header,
                reason: e.to_string(),
            })?;

        let payload_json =
            base64url::decode_string(payload_b64, MAX_DECODED_PAYLOAD_SIZE, Segment::Payload)?;
        let claims: Claims =
            miniserde::json::from_str(&payload_json).map_err(|e| Rejection::Json {
                segment: Segment::Payload,
                reason: e.to_string(),
            })?;

        Ok(Self {
            signing_input,
            signature_b64,
            header,
            claims,
        })
    }

    /// Check the algorithm and HMAC signature, moving to `VerifiedToken`
    pub(crate) fn verify(self, secret: &[u8]) -> Result<VerifiedToken, Rejection> {
        ensure_hs256(&self.header.algorithm)?;
        verify_hs256(self.signing_input, self.signature_b64, secret)?;

        Ok(VerifiedToken {
            claims: self.claims,
        })
    }
}

/// A token whose signature has been verified
pub(crate) struct VerifiedToken {
    claims: Claims,
}

impl VerifiedToken {
    /// Validate the claims and release them
    pub(crate) fn validate(self, config: &Validation) -> Result<Claims, Rejection> {
        validate_claims(&self.claims, config)?;
        Ok(self.claims)
    }
}
