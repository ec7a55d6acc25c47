//! Base64URL encoding/decoding per RFC 4648
//!
//! This module provides a thin wrapper around the `base64` crate with
//! size limit validation for security.

use crate::error::{Rejection, Segment};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Encode bytes to an unpadded Base64URL string
pub(crate) fn encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode Base64URL string to bytes with maximum size limit
pub(crate) fn decode_bytes(
    input: &str,
    max_size: usize,
    segment: Segment,
) -> Result<Vec<u8>, Rejection> {
    let result = URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| Rejection::Base64 {
            segment,
            reason: e.to_string(),
        })?;

    // Validate decoded size to prevent DoS attacks
    if result.len() > max_size {
        return Err(Rejection::Base64 {
            segment,
            reason: format!(
                "decoded size exceeds limit: {} bytes (max: {max_size})",
                result.len()
            ),
        });
    }

    Ok(result)
}

/// Decode Base64URL string to UTF-8 string with size limit
pub(crate) fn decode_string(
    input: &str,
    max_size: usize,
    segment: Segment,
) -> Result<String, Rejection> {
    decode_bytes(input, max_size, segment).and_then(|bytes| {
        String::from_utf8(bytes).map_err(|e| Rejection::Base64 {
            segment,
            reason: format!("invalid UTF-8: {e}"),
        })
    })
}
