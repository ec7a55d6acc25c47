//! HS256 signing and verification

use crate::error::{Error, Rejection, Segment};
use crate::limits::{MAX_DECODED_SIGNATURE_SIZE, MAX_SIGNATURE_B64_SIZE};
use crate::utils::base64url;

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// The only algorithm session tokens are signed with
pub(crate) const HS256: &str = "HS256";

/// Accept the header algorithm only if it is exactly HS256
pub(crate) fn ensure_hs256(algorithm: &str) -> Result<(), Rejection> {
    if algorithm == HS256 {
        Ok(())
    } else if algorithm.eq_ignore_ascii_case("none") {
        Err(Rejection::AlgorithmNone)
    } else {
        Err(Rejection::AlgorithmUnsupported(algorithm.to_string()))
    }
}

fn mac(secret: &[u8], signing_input: &str) -> Result<Hmac<Sha256>, hmac::digest::InvalidLength> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret)?;
    mac.update(signing_input.as_bytes());
    Ok(mac)
}

/// Compute the Base64URL HS256 signature of `signing_input`
pub(crate) fn sign_hs256(signing_input: &str, secret: &[u8]) -> Result<String, Error> {
    let mac = mac(secret, signing_input).map_err(|e| Error::Encoding(e.to_string()))?;
    Ok(base64url::encode(mac.finalize().into_bytes()))
}

/// Verify HS256 signature with constant-time comparison
pub(crate) fn verify_hs256(
    signing_input: &str,
    signature: &str,
    secret: &[u8],
) -> Result<(), Rejection> {
    if signature.len() > MAX_SIGNATURE_B64_SIZE {
        return Err(Rejection::Base64 {
            segment: Segment::Signature,
            reason: format!(
                "encoded size exceeds limit: {} bytes (max: {MAX_SIGNATURE_B64_SIZE})",
                signature.len()
            ),
        });
    }
    let provided_signature =
        base64url::decode_bytes(signature, MAX_DECODED_SIGNATURE_SIZE, Segment::Signature)?;

    let mac = mac(secret, signing_input).map_err(|_| Rejection::SignatureMismatch)?;
    let expected_signature = mac.finalize().into_bytes();

    if provided_signature.len() != expected_signature.len() {
        return Err(Rejection::SignatureMismatch);
    }

    if constant_time_eq(&provided_signature, &expected_signature) {
        Ok(())
    } else {
        Err(Rejection::SignatureMismatch)
    }
}
