//! Concurrent use of a shared signer

use jwtsession::*;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 128;

fn claims_for(i: usize) -> Claims {
    Claims::new(i as i64)
        .with_nickname(format!("user-{i}"))
        .with_openid(format!("openid-{i}"))
        .with_expires_at(4_000_000_000)
}

#[test]
fn test_concurrent_create_and_parse_match_sequential() {
    let signer = Arc::new(Signer::new(b"shared-secret"));

    let sequential: Vec<String> = (0..THREADS)
        .map(|i| signer.create_token(&claims_for(i)).unwrap())
        .collect();

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let signer = Arc::clone(&signer);
            thread::spawn(move || {
                let token = signer.create_token(&claims_for(i)).unwrap();
                let claims = signer.parse_token(&token).unwrap();
                (token, claims)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (token, claims) = handle.join().unwrap();
        assert_eq!(token, sequential[i]);
        assert_eq!(claims, claims_for(i));
    }
}

#[test]
fn test_concurrent_refresh_does_not_leak_into_parse() {
    let signer = Signer::new(b"shared-secret");
    let expired = signer
        .create_token(&Claims::new(1).with_expires_at(1_000))
        .unwrap();

    thread::scope(|scope| {
        for i in 0..THREADS {
            let signer = &signer;
            let expired = &expired;
            scope.spawn(move || {
                if i % 2 == 0 {
                    let refreshed = signer.refresh_token(expired).unwrap();
                    assert!(signer.parse_token(&refreshed).is_ok());
                } else {
                    assert!(signer.parse_token(expired).unwrap_err().is_expired());
                }
            });
        }
    });
}
