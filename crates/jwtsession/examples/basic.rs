//! Run with
//!
//! ```not_rust
//! RUST_LOG=jwtsession=debug cargo run --example basic
//! ```

use std::time::Duration;

use jwtsession::{Claims, Clock, Error, Signer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// What an HTTP layer would answer for a bearer token
#[derive(Debug)]
enum Outcome {
    Authorized(Claims),
    RefreshRequired,
    Unauthorized,
}

fn authenticate(signer: &Signer, authorization: &str) -> Outcome {
    let Some(token) = authorization.strip_prefix("Bearer ") else {
        return Outcome::Unauthorized;
    };

    match signer.parse_token(token) {
        Ok(claims) => Outcome::Authorized(claims),
        Err(Error::TokenExpired { .. }) => Outcome::RefreshRequired,
        Err(e) => {
            tracing::warn!("token validation failed: {e}");
            Outcome::Unauthorized
        }
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jwtsession=debug,basic=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let signer = Signer::new(b"change-me-to-a-long-random-secret")
        .issuer("demo-auth")
        .refresh_window(Duration::from_secs(30 * 60))
        .build();

    let claims = Claims::new(1001)
        .with_mobile("13800138000")
        .with_avatar("https://cdn.example.com/u/1001.png")
        .with_nickname("Alice")
        .with_openid("oAbC123")
        .expires_in(Duration::from_secs(3600));

    let token = signer.create_token(&claims)?;
    tracing::info!(user_id = claims.user_id, exp = ?claims.expires_at, "issued token");
    if let Outcome::Authorized(verified) = authenticate(&signer, &format!("Bearer {token}")) {
        tracing::info!(user_id = verified.user_id, "fresh token accepted for {}", verified.nickname);
    }

    let stale = signer.create_token(&claims.clone().with_expires_at(Clock::System.now() - 60))?;
    let outcome = authenticate(&signer, &format!("Bearer {stale}"));
    tracing::info!("stale token: {outcome:?}");

    if matches!(outcome, Outcome::RefreshRequired) {
        let renewed = signer.refresh_token(&stale)?;
        let outcome = authenticate(&signer, &format!("Bearer {renewed}"));
        tracing::info!("renewed token: {outcome:?}");
    }

    let forged = Signer::new(b"attacker").create_token(&claims)?;
    let outcome = authenticate(&signer, &format!("Bearer {forged}"));
    tracing::info!("forged token: {outcome:?}");

    Ok(())
}
