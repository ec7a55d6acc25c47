//! Refresh tests

use jwtsession::*;
use std::time::Duration;

const SECRET: &[u8] = b"refresh-secret";

fn now() -> i64 {
    Clock::System.now()
}

fn identity() -> Claims {
    Claims::new(88)
        .with_mobile("13900139000")
        .with_avatar("https://cdn.example.com/u/88.png")
        .with_nickname("Carol")
        .with_openid("oCarol")
}

#[test]
fn test_refresh_expired_token() {
    let signer = Signer::new(SECRET);
    let original = identity()
        .with_issued_at(now() - 7200)
        .with_expires_at(now() - 3600);
    let token = signer.create_token(&original).unwrap();
    assert!(signer.parse_token(&token).unwrap_err().is_expired());

    let refreshed = signer.refresh_token(&token).unwrap();
    let claims = signer.parse_token(&refreshed).unwrap();

    assert!(claims.same_identity(&original));
    assert_eq!(claims.issued_at, original.issued_at);
    assert!(claims.expires_at.unwrap() > original.expires_at.unwrap());
    assert!(claims.expires_at.unwrap() >= now() + 3500);
}

#[test]
fn test_refresh_valid_token() {
    let signer = Signer::new(SECRET);
    let original = identity().with_expires_at(now() + 60);
    let token = signer.create_token(&original).unwrap();

    let refreshed = signer.refresh_token(&token).unwrap();
    let claims = signer.parse_token(&refreshed).unwrap();
    assert!(claims.expires_at.unwrap() > original.expires_at.unwrap());
}

#[test]
fn test_refresh_not_yet_valid_token() {
    let signer = Signer::new(SECRET);
    let token = signer
        .create_token(&identity().with_not_before(now() + 60))
        .unwrap();
    assert!(signer.refresh_token(&token).is_ok());
}

#[test]
fn test_refresh_token_without_expiry() {
    let signer = Signer::new(SECRET);
    let token = signer.create_token(&identity()).unwrap();

    let refreshed = signer.refresh_token_at(&token, Clock::Fixed(1_000)).unwrap();
    let claims = signer
        .parse_token_with(&refreshed, &Validation::new().at(Clock::Fixed(1_000)))
        .unwrap();
    assert_eq!(claims.expires_at, Some(1_000 + 3600));
}

#[test]
fn test_refresh_rejects_invalid_signature() {
    let token = Signer::new(b"someone-else")
        .create_token(&identity().with_expires_at(now() - 10))
        .unwrap();

    assert_eq!(
        Signer::new(SECRET).refresh_token(&token),
        Err(Error::TokenInvalid(Rejection::SignatureMismatch))
    );
}

#[test]
fn test_refresh_rejects_malformed() {
    let signer = Signer::new(SECRET);
    assert!(matches!(
        signer.refresh_token("not-a-token"),
        Err(Error::TokenMalformed(_))
    ));
    assert!(matches!(
        signer.refresh_token("a.b.c"),
        Err(Error::TokenMalformed(_))
    ));
}

#[test]
fn test_refresh_leaves_parsing_strict() {
    let signer = Signer::new(SECRET);
    let token = signer
        .create_token(&identity().with_expires_at(now() - 10))
        .unwrap();

    assert!(signer.refresh_token(&token).is_ok());
    // Refresh relaxes checks for its own call only
    assert!(signer.parse_token(&token).unwrap_err().is_expired());
}

#[test]
fn test_custom_refresh_window() {
    let signer = Signer::new(SECRET)
        .refresh_window(Duration::from_secs(15 * 60))
        .build();
    let token = signer
        .create_token(&identity().with_expires_at(500))
        .unwrap();

    let refreshed = signer.refresh_token_at(&token, Clock::Fixed(10_000)).unwrap();
    let claims = signer
        .parse_token_with(&refreshed, &Validation::new().at(Clock::Fixed(10_000)))
        .unwrap();
    assert_eq!(claims.expires_at, Some(10_000 + 900));
}

#[test]
fn test_refresh_chain() {
    let signer = Signer::new(SECRET);
    let mut token = signer
        .create_token(&identity().with_expires_at(now() - 1))
        .unwrap();

    for _ in 0..3 {
        token = signer.refresh_token(&token).unwrap();
    }
    assert!(signer.parse_token(&token).unwrap().same_identity(&identity()));
}

#[test]
fn test_refresh_rejects_issued_in_future() {
    let signer = Signer::new(SECRET);
    let token = signer
        .create_token(&identity().with_issued_at(now() + 7200).with_expires_at(now() - 60))
        .unwrap();

    assert!(matches!(
        signer.refresh_token(&token),
        Err(Error::TokenInvalid(Rejection::IssuedInFuture { .. }))
    ));
}

#[test]
fn test_refresh_follows_configured_clock() {
    let signer = Signer::new(SECRET)
        .validation(Validation::new().at(Clock::Fixed(1_000)))
        .build();
    let token = signer
        .create_token(&identity().with_expires_at(500))
        .unwrap();

    let claims = signer
        .parse_token(&signer.refresh_token(&token).unwrap())
        .unwrap();
    assert_eq!(claims.expires_at, Some(1_000 + 3600));
}
