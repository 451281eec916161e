//! # Locale Endpoint Table Tests
//!
//! Verifies that every documented marketplace locale resolves to the exact
//! gateway host and signing region, and that unknown codes fail fast.

use amzn_catalog::catalog::endpoints::{resolve, LOCALES};
use amzn_catalog::catalog::getitems::CatalogLookup;
use amzn_catalog::configs::ClientCredentials;
use amzn_catalog::core::error::CatalogError;
use amzn_catalog::loggers::builder::LoggerBuilder;

#[test]
fn test_all_locales_resolve_to_documented_pairs() {
    let expected = [
        ("au", "webservices.amazon.com.au", "us-west-2"),
        ("br", "webservices.amazon.com.br", "us-east-1"),
        ("ca", "webservices.amazon.ca", "us-east-1"),
        ("fr", "webservices.amazon.fr", "eu-west-1"),
        ("de", "webservices.amazon.de", "eu-west-1"),
        ("in", "webservices.amazon.in", "eu-west-1"),
        ("it", "webservices.amazon.it", "eu-west-1"),
        ("jp", "webservices.amazon.co.jp", "us-west-2"),
        ("mx", "webservices.amazon.com.mx", "us-east-1"),
        ("nl", "webservices.amazon.nl", "eu-west-1"),
        ("sg", "webservices.amazon.sg", "us-west-2"),
        ("sa", "webservices.amazon.sa", "eu-west-1"),
        ("es", "webservices.amazon.es", "eu-west-1"),
        ("se", "webservices.amazon.se", "eu-west-1"),
        ("tr", "webservices.amazon.com.tr", "eu-west-1"),
        ("ae", "webservices.amazon.ae", "eu-west-1"),
        ("uk", "webservices.amazon.co.uk", "eu-west-1"),
        ("us", "webservices.amazon.com", "us-east-1"),
    ];

    assert_eq!(LOCALES.len(), expected.len());

    for (code, host, region) in expected {
        let endpoint = resolve(code).unwrap_or_else(|_| panic!("locale {} should resolve", code));
        assert_eq!(endpoint.host, host, "host mismatch for {}", code);
        assert_eq!(endpoint.region, region, "region mismatch for {}", code);
    }
}

#[test]
fn test_unknown_locale_is_a_config_error() {
    let err = resolve("zz").expect_err("unknown locale must not resolve");
    match err {
        CatalogError::ConfigError(msg) => assert!(msg.contains("zz")),
        other => panic!("expected ConfigError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_construction_fails_fast_on_unknown_locale() {
    let logger = LoggerBuilder::new("endpoints_test")
        .build()
        .expect("Failed to build test logger");

    let credentials = ClientCredentials {
        access_key: "AKIAEXAMPLEKEY".to_string(),
        secret_key: "example-secret".to_string(),
        partner_tag: "mytag-20".to_string(),
        locale: "xx".to_string(),
        allow_invalid_certs: false,
    };

    let result = CatalogLookup::new(credentials, logger);
    assert!(matches!(result, Err(CatalogError::ConfigError(_))));
}
