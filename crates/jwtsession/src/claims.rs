//! Session claims carried by every token
//!
//! The identity fields (`userId`, `mobile`, `avatar`, `nickname`, `openid`)
//! are always present in the payload. The registered claims from
//! [RFC 7519 Section 4.1](https://datatracker.ietf.org/doc/html/rfc7519#section-4.1)
//! are optional and omitted from the payload when unset.

use crate::utils::bounds::add_duration;
use crate::validation::Clock;

use miniserde::Deserialize;
use miniserde::ser::{Fragment, Map, Serialize};
use std::borrow::Cow;
use std::time::Duration;

/// Identity payload signed into a session token
///
/// # Examples
///
/// ```
/// use jwtsession::Claims;
/// use std::time::Duration;
///
/// let claims = Claims::new(42)
///     .with_mobile("13800000000")
///     .with_nickname("alice")
///     .expires_in(Duration::from_secs(3600));
///
/// assert_eq!(claims.user_id, 42);
/// assert!(claims.expires_at.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Claims {
    /// Numeric user identifier
    #[serde(rename = "userId")]
    pub user_id: i64,

    /// Mobile number
    pub mobile: String,

    /// Avatar reference (usually a URL)
    pub avatar: String,

    /// Display name
    pub nickname: String,

    /// Third-party login identifier
    pub openid: String,

    /// Audience (aud)
    #[serde(rename = "aud")]
    pub audience: Option<String>,

    /// Expiration Time (exp), seconds since Unix epoch
    #[serde(rename = "exp")]
    pub expires_at: Option<i64>,

    /// JWT ID (jti)
    #[serde(rename = "jti")]
    pub jwt_id: Option<String>,

    /// Issued At (iat), seconds since Unix epoch
    #[serde(rename = "iat")]
    pub issued_at: Option<i64>,

    /// Issuer (iss)
    #[serde(rename = "iss")]
    pub issuer: Option<String>,

    /// Not Before (nbf), seconds since Unix epoch
    #[serde(rename = "nbf")]
    pub not_before: Option<i64>,

    /// Subject (sub)
    #[serde(rename = "sub")]
    pub subject: Option<String>,
}

impl Claims {
    /// Claims for a user with empty profile fields and no registered claims
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }

    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = mobile.into();
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn with_openid(mut self, openid: impl Into<String>) -> Self {
        self.openid = openid.into();
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_jwt_id(mut self, jwt_id: impl Into<String>) -> Self {
        self.jwt_id = Some(jwt_id.into());
        self
    }

    pub fn with_expires_at(mut self, timestamp: i64) -> Self {
        self.expires_at = Some(timestamp);
        self
    }

    pub fn with_not_before(mut self, timestamp: i64) -> Self {
        self.not_before = Some(timestamp);
        self
    }

    pub fn with_issued_at(mut self, timestamp: i64) -> Self {
        self.issued_at = Some(timestamp);
        self
    }

    /// Set `iat` to now and `exp` to now plus `lifetime`, using the system clock
    pub fn expires_in(self, lifetime: Duration) -> Self {
        let now = Clock::System.now();
        self.with_issued_at(now)
            .with_expires_at(add_duration(now, lifetime))
    }

    /// A copy of these claims with a new expiry
    ///
    /// The receiver is left untouched; the identity fields and every other
    /// registered claim carry over unchanged.
    pub fn renewed(&self, expires_at: i64) -> Self {
        Self {
            expires_at: Some(expires_at),
            ..self.clone()
        }
    }

    /// Whether the identity fields of `self` and `other` match
    pub fn same_identity(&self, other: &Claims) -> bool {
        self.user_id == other.user_id
            && self.mobile == other.mobile
            && self.avatar == other.avatar
            && self.nickname == other.nickname
            && self.openid == other.openid
    }
}

// Serialized by hand so unset registered claims are left out of the payload
// instead of being written as `null`.
impl Serialize for Claims {
    fn begin(&self) -> Fragment<'_> {
        let mut entries: Vec<(&'static str, &dyn Serialize)> = Vec::with_capacity(12);
        entries.push(("userId", &self.user_id));
        entries.push(("mobile", &self.mobile));
        entries.push(("avatar", &self.avatar));
        entries.push(("nickname", &self.nickname));
        entries.push(("openid", &self.openid));

        if let Some(aud) = &self.audience {
            entries.push(("aud", aud));
        }
        if let Some(exp) = &self.expires_at {
            entries.push(("exp", exp));
        }
        if let Some(jti) = &self.jwt_id {
            entries.push(("jti", jti));
        }
        if let Some(iat) = &self.issued_at {
            entries.push(("iat", iat));
        }
        if let Some(iss) = &self.issuer {
            entries.push(("iss", iss));
        }
        if let Some(nbf) = &self.not_before {
            entries.push(("nbf", nbf));
        }
        if let Some(sub) = &self.subject {
            entries.push(("sub", sub));
        }

        Fragment::Map(Box::new(ClaimEntries(entries.into_iter())))
    }
}

struct ClaimEntries<'a>(std::vec::IntoIter<(&'static str, &'a dyn Serialize)>);

impl Map for ClaimEntries<'_> {
    fn next(&mut self) -> Option<(Cow<'_, str>, &dyn Serialize)> {
        self.0
            .next()
            .map(|(key, value)| (Cow::Borrowed(key), value))
    }
}
