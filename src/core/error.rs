//! # Core Error Module
//!
//! This module defines the central `CatalogError` type used throughout the
//! library. It leverages `thiserror` for error message formatting and `serde`
//! for serialization.

use serde::Serialize;
use thiserror::Error;

/// Central error type for the `amzn_catalog` library.
#[derive(Debug, Error, Serialize)]
pub enum CatalogError {
    /// Error related to configuration loading, merging, or an unrecognized
    /// locale code.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error related to internal logic or state.
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Standard HTTP request or network failure.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Error produced while deriving the SigV4 authorization header.
    #[error("Request signing error: {0}")]
    SigningError(String),

    /// Error returned when the PA-API response is not valid JSON.
    /// This can occur when the regional gateway serves an HTML error page.
    #[error("PA-API returned non-JSON content from {url}. Status: {status}")]
    NonJsonResponse {
        /// The target URL that was requested.
        url: String,
        /// The HTTP status code received.
        status: u16,
        /// A snippet of the response body for diagnostic purposes.
        body_snippet: String,
    },

    /// Error returned when the JSON structure is missing expected mandatory fields.
    #[error("Malformed PA-API response structure at {endpoint}: {details}")]
    MalformedResponse {
        /// The endpoint URL that was called.
        endpoint: String,
        /// Description of why the structure was considered malformed.
        details: String,
    },
}
