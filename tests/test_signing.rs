//! # SigV4 Signer Tests
//!
//! Structural checks over the derived authorization headers. The signing
//! instant is pinned so every assertion is deterministic.

use chrono::{TimeZone, Utc};

use amzn_catalog::catalog::signing::{Signer, GET_ITEMS_PATH, GET_ITEMS_TARGET};

const PAYLOAD: &str = r#"{"ItemIds":["B001TEST01"],"PartnerTag":"mytag-20","PartnerType":"Associates","Resources":["ItemInfo.Title"]}"#;

fn pinned_signer() -> Signer {
    Signer::new("AKIAEXAMPLEKEY", "example-secret", "us-east-1")
}

#[test]
fn test_signed_headers_structure() {
    let now = Utc.with_ymd_and_hms(2026, 2, 23, 21, 10, 42).unwrap();
    let signed = pinned_signer()
        .sign("webservices.amazon.com", GET_ITEMS_PATH, GET_ITEMS_TARGET, PAYLOAD, now)
        .expect("signing should succeed");

    assert_eq!(signed.amz_date, "20260223T211042Z");
    assert_eq!(signed.amz_target, GET_ITEMS_TARGET);
    assert_eq!(signed.content_encoding, "amz-1.0");
    assert_eq!(signed.content_type, "application/json; charset=utf-8");

    // Credential scope: date / region / service / terminator
    assert!(signed.authorization.starts_with(
        "AWS4-HMAC-SHA256 Credential=AKIAEXAMPLEKEY/20260223/us-east-1/ProductAdvertisingAPI/aws4_request, "
    ));
    assert!(signed.authorization.contains(
        "SignedHeaders=content-encoding;content-type;host;x-amz-date;x-amz-target, "
    ));

    // The trailing signature is 64 lowercase hex characters
    let signature = signed
        .authorization
        .rsplit("Signature=")
        .next()
        .expect("authorization must carry a signature");
    assert_eq!(signature.len(), 64);
    assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_signature_is_deterministic_for_fixed_instant() {
    let now = Utc.with_ymd_and_hms(2026, 2, 23, 21, 10, 42).unwrap();
    let signer = pinned_signer();

    let a = signer
        .sign("webservices.amazon.com", GET_ITEMS_PATH, GET_ITEMS_TARGET, PAYLOAD, now)
        .unwrap();
    let b = signer
        .sign("webservices.amazon.com", GET_ITEMS_PATH, GET_ITEMS_TARGET, PAYLOAD, now)
        .unwrap();

    assert_eq!(a.authorization, b.authorization);
}

#[test]
fn test_signature_varies_with_inputs() {
    let now = Utc.with_ymd_and_hms(2026, 2, 23, 21, 10, 42).unwrap();
    let signer = pinned_signer();

    let base = signer
        .sign("webservices.amazon.com", GET_ITEMS_PATH, GET_ITEMS_TARGET, PAYLOAD, now)
        .unwrap();

    // Different payload
    let other_payload = signer
        .sign("webservices.amazon.com", GET_ITEMS_PATH, GET_ITEMS_TARGET, "{}", now)
        .unwrap();
    assert_ne!(base.authorization, other_payload.authorization);

    // Different host changes the canonical headers and thus the signature
    let other_host = signer
        .sign("webservices.amazon.co.uk", GET_ITEMS_PATH, GET_ITEMS_TARGET, PAYLOAD, now)
        .unwrap();
    assert_ne!(base.authorization, other_host.authorization);

    // Different secret key
    let other_signer = Signer::new("AKIAEXAMPLEKEY", "other-secret", "us-east-1");
    let other_secret = other_signer
        .sign("webservices.amazon.com", GET_ITEMS_PATH, GET_ITEMS_TARGET, PAYLOAD, now)
        .unwrap();
    assert_ne!(base.authorization, other_secret.authorization);
}
