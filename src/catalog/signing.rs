//! # AWS Signature Version 4
//!
//! Request signing for the ProductAdvertisingAPI service. The gateway
//! rejects any request whose `Authorization` header does not carry a valid
//! SigV4 signature scoped to the marketplace's signing region.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::core::error::CatalogError;

type HmacSha256 = Hmac<Sha256>;

/// SigV4 service name for all PA-API operations.
pub const SERVICE: &str = "ProductAdvertisingAPI";

/// Operation target header value for GetItems.
pub const GET_ITEMS_TARGET: &str = "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.GetItems";

/// Request path for GetItems.
pub const GET_ITEMS_PATH: &str = "/paapi5/getitems";

const CONTENT_ENCODING: &str = "amz-1.0";
const CONTENT_TYPE: &str = "application/json; charset=utf-8";
const ALGORITHM: &str = "AWS4-HMAC-SHA256";

// Alphabetical, matching the canonical header block below.
const SIGNED_HEADERS: &str = "content-encoding;content-type;host;x-amz-date;x-amz-target";

/// The computed header set for one signed request.
#[derive(Debug, Clone)]
pub struct SignedHeaders {
    pub authorization: String,
    pub amz_date: String,
    pub amz_target: String,
    pub content_encoding: String,
    pub content_type: String,
}

/// Derives SigV4 authorization headers for PA-API POST requests.
pub struct Signer {
    access_key: String,
    secret_key: String,
    region: String,
}

impl Signer {
    pub fn new(access_key: &str, secret_key: &str, region: &str) -> Self {
        Self {
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
            region: region.to_string(),
        }
    }

    fn hmac(key: &[u8], data: &[u8]) -> Result<Vec<u8>, CatalogError> {
        let mut mac = HmacSha256::new_from_slice(key)
            .map_err(|e| CatalogError::SigningError(format!("Invalid key material: {}", e)))?;
        mac.update(data);
        Ok(mac.finalize().into_bytes().to_vec())
    }

    fn sha256_hex(data: &[u8]) -> String {
        hex::encode(Sha256::digest(data))
    }

    /// Signs a POST of `payload` to `https://{host}{path}` at the given
    /// instant. The instant is a parameter so signatures are reproducible
    /// under test.
    pub fn sign(
        &self,
        host: &str,
        path: &str,
        target: &str,
        payload: &str,
        now: DateTime<Utc>,
    ) -> Result<SignedHeaders, CatalogError> {
        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
        let date_stamp = now.format("%Y%m%d").to_string();

        let canonical_headers = format!(
            "content-encoding:{}\ncontent-type:{}\nhost:{}\nx-amz-date:{}\nx-amz-target:{}\n",
            CONTENT_ENCODING, CONTENT_TYPE, host, amz_date, target
        );

        let canonical_request = format!(
            "POST\n{}\n\n{}\n{}\n{}",
            path,
            canonical_headers,
            SIGNED_HEADERS,
            Self::sha256_hex(payload.as_bytes())
        );

        let credential_scope = format!("{}/{}/{}/aws4_request", date_stamp, self.region, SERVICE);
        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            ALGORITHM,
            amz_date,
            credential_scope,
            Self::sha256_hex(canonical_request.as_bytes())
        );

        // Signing key derivation: HMAC chain over date, region, service.
        let k_secret = format!("AWS4{}", self.secret_key);
        let k_date = Self::hmac(k_secret.as_bytes(), date_stamp.as_bytes())?;
        let k_region = Self::hmac(&k_date, self.region.as_bytes())?;
        let k_service = Self::hmac(&k_region, SERVICE.as_bytes())?;
        let k_signing = Self::hmac(&k_service, b"aws4_request")?;
        let signature = hex::encode(Self::hmac(&k_signing, string_to_sign.as_bytes())?);

        let authorization = format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            ALGORITHM, self.access_key, credential_scope, SIGNED_HEADERS, signature
        );

        Ok(SignedHeaders {
            authorization,
            amz_date,
            amz_target: target.to_string(),
            content_encoding: CONTENT_ENCODING.to_string(),
            content_type: CONTENT_TYPE.to_string(),
        })
    }
}
