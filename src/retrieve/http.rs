//! src/retrieve/http.rs
//!
//! HttpClient: thin JSON transport helper. One attempt per logical request,
//! single body read, explicit success flag. Retry, backoff, and caching are
//! deliberately absent from this layer.

use crate::core::error::CatalogError;
use crate::loggers::Logger;
use reqwest::{header::HeaderMap, Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Public options for HttpClient.
#[derive(Clone)]
pub struct HttpOptions {
    /// Optional timeout for the underlying reqwest client.
    pub timeout: Option<Duration>,

    /// Skip TLS certificate verification. Off by default.
    pub danger_accept_invalid_certs: bool,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(15)),
            danger_accept_invalid_certs: false,
        }
    }
}

/// ApiResponse<T>
///
/// Standard response wrapper returned by HttpClient methods.
#[derive(Debug)]
pub struct ApiResponse<T> {
    /// Parsed JSON body when success.
    pub data: Option<T>,

    /// Raw error body text when non-success.
    pub error_body: Option<String>,

    /// HTTP status code.
    pub status: u16,

    /// Whether the response was successful (2xx).
    pub success: bool,

    /// Response headers.
    pub headers: HeaderMap,
}

/// Truncates a body to at most `max` bytes for diagnostics, backing off to
/// the nearest char boundary so multibyte UTF-8 never splits.
pub fn body_snippet(body: &str, max: usize) -> &str {
    let mut end = body.len().min(max);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

/// HttpClient
///
/// Primary HTTP helper.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    logger: Logger,
}

impl HttpClient {
    pub fn new(logger: Logger) -> Self {
        Self::new_with_opts(logger, None)
    }

    pub fn new_with_opts(logger: Logger, opts: Option<HttpOptions>) -> Self {
        let opts = opts.unwrap_or_default();
        let mut builder = Client::builder();
        if let Some(timeout) = opts.timeout {
            builder = builder.timeout(timeout);
        }
        if opts.danger_accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder.build().unwrap_or_else(|_| Client::new());

        Self { client, logger }
    }

    // Single-attempt request. Reads the body once and decides success from
    // the HTTP status.
    async fn request<T, B>(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, CatalogError>
    where
        T: DeserializeOwned + Send + 'static,
        B: Serialize + ?Sized,
    {
        crate::info!(
            self.logger,
            "Request start",
            "method" => method.as_str(),
            "url" => url
        );

        let mut rb = self.client.request(method, url).headers(headers);
        if let Some(b) = body {
            rb = rb.json(b);
        }

        let resp = match rb.send().await {
            Ok(resp) => resp,
            Err(e) => {
                crate::error!(self.logger, "Network failure", "url" => url, "error" => e.to_string());
                return Err(CatalogError::HttpError(e.to_string()));
            }
        };

        let status = resp.status();
        let status_u16 = status.as_u16();
        let resp_headers = resp.headers().clone();
        let body_text = resp.text().await.unwrap_or_default();

        if status.is_success() {
            match serde_json::from_str::<T>(&body_text) {
                Ok(parsed) => Ok(ApiResponse {
                    data: Some(parsed),
                    error_body: None,
                    status: status_u16,
                    success: true,
                    headers: resp_headers,
                }),
                Err(_) => {
                    // 2xx but undecodable: typically an HTML page served in
                    // front of the gateway.
                    Err(CatalogError::NonJsonResponse {
                        url: url.to_string(),
                        status: status_u16,
                        body_snippet: body_snippet(&body_text, 250).to_string(),
                    })
                }
            }
        } else {
            Ok(ApiResponse {
                data: None,
                error_body: if body_text.is_empty() { None } else { Some(body_text) },
                status: status_u16,
                success: false,
                headers: resp_headers,
            })
        }
    }

    /// Public POST request with JSON body and JSON response parsing.
    pub async fn post<T: DeserializeOwned + Send + 'static, B: Serialize + ?Sized>(
        &self,
        url: &str,
        headers: HeaderMap,
        body: &B,
    ) -> Result<ApiResponse<T>, CatalogError> {
        self.request(Method::POST, url, headers, Some(body)).await
    }
}
