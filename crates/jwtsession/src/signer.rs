use crate::algorithm::sign_hs256;
use crate::claims::Claims;
use crate::error::{Error, Result};
use crate::header::TokenHeader;
use crate::token::ParsedToken;
use crate::utils::base64url;
use crate::utils::bounds::add_duration;
use crate::validation::{Clock, Validation};

use std::sync::Arc;
use std::time::Duration;

/// Default lifetime added to a token's expiry on refresh
pub const DEFAULT_REFRESH_WINDOW: Duration = Duration::from_secs(60 * 60);

/// Creates, verifies and refreshes HS256 session tokens
///
/// The signer is configured once and is immutable afterwards; clones share
/// the secret, and every operation is a pure function of the secret, the
/// settings and its arguments.
#[derive(Clone)]
pub struct Signer {
    secret: Arc<[u8]>,
    config_refresh_window: Duration,
    config_validation: Validation,
    config_issuer: Option<String>,
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("secret", &"<redacted>")
            .field("refresh_window", &self.config_refresh_window)
            .field("validation", &self.config_validation)
            .field("issuer", &self.config_issuer)
            .finish()
    }
}

impl Signer {
    /// Create a signer for `secret`
    ///
    /// The key is used as given; choosing a strong secret is up to the caller.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().into(),
            config_refresh_window: DEFAULT_REFRESH_WINDOW,
            config_validation: Validation::default(),
            config_issuer: None,
        }
    }

    /// Configure how far into the future a refreshed token expires
    pub fn refresh_window(&mut self, window: Duration) -> &mut Self {
        self.config_refresh_window = window;
        self
    }

    /// Configure the validation used by [`Signer::parse_token`]
    pub fn validation(&mut self, validation: Validation) -> &mut Self {
        self.config_validation = validation;
        self
    }

    /// Configure an issuer stamped into claims that carry none
    pub fn issuer(&mut self, issuer: impl Into<String>) -> &mut Self {
        self.config_issuer = Some(issuer.into());
        self
    }

    /// Finish configuration
    pub fn build(&mut self) -> Self {
        self.clone()
    }
}

impl Signer {
    /// Sign `claims` into a compact token
    pub fn create_token(&self, claims: &Claims) -> Result<String> {
        let header_json = miniserde::json::to_string(&TokenHeader::hs256());
        let payload_json = match (&claims.issuer, &self.config_issuer) {
            (None, Some(issuer)) => {
                miniserde::json::to_string(&claims.clone().with_issuer(issuer.as_str()))
            }
            _ => miniserde::json::to_string(claims),
        };

        let signing_input = format!(
            "{}.{}",
            base64url::encode(header_json),
            base64url::encode(payload_json)
        );
        let signature = sign_hs256(&signing_input, &self.secret)?;

        tracing::trace!(user_id = claims.user_id, exp = ?claims.expires_at, "token created");
        Ok(format!("{signing_input}.{signature}"))
    }

    /// Verify `token` and return its claims
    ///
    /// Uses the validation configured on the signer and the system clock
    /// unless the configured validation carries another.
    pub fn parse_token(&self, token: &str) -> Result<Claims> {
        self.parse_token_with(token, &self.config_validation)
    }

    /// Verify `token` against the given validation settings
    ///
    /// Structure is checked first, then the signature, and only then the
    /// temporal claims, so no timestamp is trusted before it is authenticated.
    pub fn parse_token_with(&self, token: &str, validation: &Validation) -> Result<Claims> {
        ParsedToken::parse(token)
            .and_then(|parsed| parsed.verify(&self.secret))
            .and_then(|verified| verified.validate(validation))
            .map_err(|rejection| {
                tracing::debug!(%rejection, "token rejected");
                Error::from(rejection)
            })
    }

    /// Issue a new token for `token` with its expiry moved to now plus the
    /// refresh window
    ///
    /// An expired or not-yet-valid token can be refreshed as long as it is
    /// well-formed and authentic; malformed and invalid tokens are refused
    /// with the same error [`Signer::parse_token`] would return, and so is a
    /// token whose `iat` lies in the future. "Now" comes from the clock of the
    /// configured validation.
    pub fn refresh_token(&self, token: &str) -> Result<String> {
        self.refresh_token_at(token, self.config_validation.clock())
    }

    /// Like [`Signer::refresh_token`], reading the current time from `clock`
    pub fn refresh_token_at(&self, token: &str, clock: Clock) -> Result<String> {
        let mut validation = Validation::for_refresh()
            .leeway(self.config_validation.leeway_seconds())
            .at(clock);
        if let Some(issuer) = self.config_validation.required_issuer() {
            validation = validation.require_issuer(issuer);
        }

        let claims = self.parse_token_with(token, &validation)?;
        let expires_at = add_duration(clock.now(), self.config_refresh_window);
        let renewed = claims.renewed(expires_at);

        tracing::debug!(
            user_id = renewed.user_id,
            previous_exp = ?claims.expires_at,
            exp = expires_at,
            "token refreshed"
        );
        self.create_token(&renewed)
    }
}
