//! # jwtsession - Minimal HS256 Session Tokens
//!
//! **jwtsession** issues, verifies and refreshes signed session tokens in the
//! compact JWT serialization. A token carries a small identity payload
//! ([`Claims`]) and is signed with HMAC-SHA256 using a single symmetric
//! secret held by a [`Signer`].
//!
//! ## Quick Start
//!
//! ```
//! use jwtsession::{Claims, Error, Signer};
//! use std::time::Duration;
//!
//! let signer = Signer::new(b"a-long-random-secret");
//!
//! let claims = Claims::new(42)
//!     .with_nickname("alice")
//!     .with_openid("o-42")
//!     .expires_in(Duration::from_secs(3600));
//!
//! let token = signer.create_token(&claims)?;
//! let verified = signer.parse_token(&token)?;
//! assert_eq!(verified.user_id, 42);
//!
//! // An expired token can be exchanged for a fresh one
//! let refreshed = signer.refresh_token(&token)?;
//! assert!(signer.parse_token(&refreshed).is_ok());
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Validation Flow
//!
//! ```text
//! token ──► structure ──► signature ──► exp / nbf / iat / iss ──► Claims
//!           Malformed     Invalid       Expired / NotValidYet / Invalid
//! ```
//!
//! Every failure is classified into exactly one [`Error`] kind. The signature
//! is verified before any temporal claim is looked at, so an unsigned payload
//! with convenient timestamps is always `TokenInvalid`.
//!
//! ## Refresh
//!
//! [`Signer::refresh_token`] accepts tokens whose only problem is their
//! `exp` or `nbf`. The relaxed checks are passed to the parser as a per-call
//! [`Validation`]; there is no process-wide clock to swap, so concurrent
//! refreshes and parses never observe each other's settings.
//!
//! ## Security
//!
//! - Only `HS256` is accepted; `none` and every other algorithm are rejected.
//! - Signatures are compared in constant time via
//!   [`constant_time_eq`](https://crates.io/crates/constant_time_eq).
//! - Input sizes are bounded before decoding.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) — JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) — JSON Web Token (JWT)

mod error;

// Internal modules
pub(crate) mod algorithm;
pub(crate) mod claims;
pub(crate) mod header;
pub(crate) mod signer;
pub(crate) mod token;
pub(crate) mod utils;
pub(crate) mod validation;

pub(crate) mod limits;

// Public Interface
pub use claims::Claims;
pub use error::{Error, Rejection, Result, Segment};
pub use limits::MAX_LEEWAY_SECONDS;
pub use signer::{DEFAULT_REFRESH_WINDOW, Signer};
pub use validation::{Clock, Validation};
