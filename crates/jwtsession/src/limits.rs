//! Size limit constants for input validation

/// Maximum length for a token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum size for decoded header JSON (8KB)
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;

/// Maximum size for decoded payload JSON (64KB)
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 64 * 1024;

/// Maximum size for decoded signature bytes
/// HS256 produces 32 bytes; anything longer is rejected before hashing
pub(crate) const MAX_DECODED_SIGNATURE_SIZE: usize = 64;

/// Maximum size for the Base64URL-encoded signature string
pub(crate) const MAX_SIGNATURE_B64_SIZE: usize = 86;

/// Maximum leeway for clock skew (300 seconds = 5 minutes)
/// Larger values would effectively disable expiry checks
pub const MAX_LEEWAY_SECONDS: u64 = 300;
