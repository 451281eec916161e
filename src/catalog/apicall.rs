use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::catalog::endpoints::Endpoint;
use crate::catalog::signing::{SignedHeaders, Signer, GET_ITEMS_PATH, GET_ITEMS_TARGET};
use crate::catalog::types::{GetItemsRequest, GetItemsResponse};
use crate::configs::ClientCredentials;
use crate::core::error::CatalogError;
use crate::loggers::Logger;
use crate::retrieve::http::{body_snippet, HttpClient, HttpOptions};
use crate::warn;

/// Low-level caller for the PA-API gateway. Owns the transport, the SigV4
/// signer, and the resolved regional endpoint.
pub struct PaapiApi {
    http: HttpClient,
    logger: Logger,
    signer: Signer,
    host: String,
    base_url: String,
}

impl PaapiApi {
    pub fn new(credentials: &ClientCredentials, endpoint: Endpoint, logger: Logger) -> Self {
        let opts = HttpOptions {
            danger_accept_invalid_certs: credentials.allow_invalid_certs,
            ..HttpOptions::default()
        };
        Self {
            http: HttpClient::new_with_opts(logger.clone(), Some(opts)),
            logger,
            signer: Signer::new(&credentials.access_key, &credentials.secret_key, endpoint.region),
            host: endpoint.host.to_string(),
            base_url: format!("https://{}", endpoint.host),
        }
    }

    /// Redirects calls to an alternate base URL. Signing still targets the
    /// real gateway host; only the transport destination changes.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn build_headers(&self, signed: &SignedHeaders) -> HeaderMap {
        let mut h = HeaderMap::new();
        let pairs = [
            ("content-encoding", signed.content_encoding.as_str()),
            ("content-type", signed.content_type.as_str()),
            ("x-amz-date", signed.amz_date.as_str()),
            ("x-amz-target", signed.amz_target.as_str()),
            ("authorization", signed.authorization.as_str()),
        ];
        for (k, v) in pairs {
            if let Ok(value) = HeaderValue::from_str(v) {
                h.insert(k, value);
            }
        }
        h
    }

    /// Executes one signed GetItems call. Single round trip, no retry.
    pub async fn get_items(&self, request: &GetItemsRequest) -> Result<GetItemsResponse, CatalogError> {
        let payload = serde_json::to_string(request)
            .map_err(|e| CatalogError::InternalError(format!("Request encode: {}", e)))?;

        let signed = self
            .signer
            .sign(&self.host, GET_ITEMS_PATH, GET_ITEMS_TARGET, &payload, Utc::now())?;

        let url = format!("{}{}", self.base_url, GET_ITEMS_PATH);
        let resp = self
            .http
            .post::<GetItemsResponse, GetItemsRequest>(&url, self.build_headers(&signed), request)
            .await?;

        if !resp.success {
            let body_str = resp.error_body.as_deref().unwrap_or("[No Body]");
            let snippet = body_snippet(body_str, 250);

            warn!(
                self.logger,
                "PA-API request failed",
                "url" => url,
                "status" => resp.status,
                "snippet" => snippet
            );

            return Err(CatalogError::HttpError(format!("Status: {}", resp.status)));
        }

        resp.data.ok_or_else(|| CatalogError::MalformedResponse {
            endpoint: url,
            details: "Empty response body".to_string(),
        })
    }
}
