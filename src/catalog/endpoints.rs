//! # PA-API Regional Endpoints
//!
//! Static lookup table mapping marketplace locale codes to their gateway
//! host and SigV4 signing region. See
//! <https://webservices.amazon.com/paapi5/documentation/common-request-parameters.html#host-and-region>

use crate::core::error::CatalogError;

/// Gateway host and signing region for one marketplace locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub host: &'static str,
    pub region: &'static str,
}

/// The full locale table. Fixed set; must match the upstream documentation
/// exactly for regional routing to work.
pub const LOCALES: [(&str, Endpoint); 18] = [
    ("au", Endpoint { host: "webservices.amazon.com.au", region: "us-west-2" }),
    ("br", Endpoint { host: "webservices.amazon.com.br", region: "us-east-1" }),
    ("ca", Endpoint { host: "webservices.amazon.ca", region: "us-east-1" }),
    ("fr", Endpoint { host: "webservices.amazon.fr", region: "eu-west-1" }),
    ("de", Endpoint { host: "webservices.amazon.de", region: "eu-west-1" }),
    ("in", Endpoint { host: "webservices.amazon.in", region: "eu-west-1" }),
    ("it", Endpoint { host: "webservices.amazon.it", region: "eu-west-1" }),
    ("jp", Endpoint { host: "webservices.amazon.co.jp", region: "us-west-2" }),
    ("mx", Endpoint { host: "webservices.amazon.com.mx", region: "us-east-1" }),
    ("nl", Endpoint { host: "webservices.amazon.nl", region: "eu-west-1" }),
    ("sg", Endpoint { host: "webservices.amazon.sg", region: "us-west-2" }),
    ("sa", Endpoint { host: "webservices.amazon.sa", region: "eu-west-1" }),
    ("es", Endpoint { host: "webservices.amazon.es", region: "eu-west-1" }),
    ("se", Endpoint { host: "webservices.amazon.se", region: "eu-west-1" }),
    ("tr", Endpoint { host: "webservices.amazon.com.tr", region: "eu-west-1" }),
    ("ae", Endpoint { host: "webservices.amazon.ae", region: "eu-west-1" }),
    ("uk", Endpoint { host: "webservices.amazon.co.uk", region: "eu-west-1" }),
    ("us", Endpoint { host: "webservices.amazon.com", region: "us-east-1" }),
];

/// Resolves a locale code to its endpoint, failing fast on unknown codes
/// instead of proceeding with an undefined gateway.
pub fn resolve(locale: &str) -> Result<Endpoint, CatalogError> {
    LOCALES
        .iter()
        .find(|(code, _)| *code == locale)
        .map(|(_, ep)| *ep)
        .ok_or_else(|| CatalogError::ConfigError(format!("Unknown locale code: {}", locale)))
}
