use serde::{Deserialize, Serialize};
use serde_json::Value;
use figment::{Figment, providers::{Format, Json, Env}};
use arc_swap::ArcSwap;
use std::sync::Arc;
use crate::core::error::CatalogError;

/// Credentials and routing options for the PA-API adapter.
///
/// `locale` selects the regional gateway and signing region; it defaults to
/// `"us"` when not supplied by the config source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientCredentials {
    pub access_key: String,
    pub secret_key: String,
    pub partner_tag: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Disables TLS certificate verification on the transport. Off by
    /// default; only enable against non-production gateways.
    #[serde(default)]
    pub allow_invalid_certs: bool,
}

fn default_locale() -> String {
    "us".to_string()
}

pub struct ConfigManager {
    current: ArcSwap<Value>,
    source_info: String,
}

impl ConfigManager {
    /// LOCAL: Merges file + AMZN_ env vars. Fails if file missing.
    pub fn get_local_config(path: &str) -> Result<Self, CatalogError> {
        if !std::path::Path::new(path).exists() {
            return Err(CatalogError::ConfigError(format!("Local file not found: {}", path)));
        }

        let data: Value = Figment::new()
            .merge(Json::file(path))
            .merge(Env::prefixed("AMZN_").split("__"))
            .extract()
            .map_err(|e| CatalogError::ConfigError(e.to_string()))?;

        Ok(Self {
            current: ArcSwap::from_pointee(data),
            source_info: format!("local:{}", path),
        })
    }

    /// ENV-ONLY: Builds a config snapshot purely from AMZN_ variables.
    /// Useful for deployments that inject credentials via the environment.
    pub fn get_env_config() -> Result<Self, CatalogError> {
        let data: Value = Figment::new()
            .merge(Env::prefixed("AMZN_").split("__"))
            .extract()
            .map_err(|e| CatalogError::ConfigError(e.to_string()))?;

        Ok(Self {
            current: ArcSwap::from_pointee(data),
            source_info: "env".to_string(),
        })
    }

    pub fn get(&self) -> Arc<Value> {
        self.current.load_full()
    }

    pub fn source_info(&self) -> &str {
        &self.source_info
    }

    /// Extracts the typed credential block from the loaded snapshot.
    pub fn credentials(&self) -> Result<ClientCredentials, CatalogError> {
        let snapshot = self.get();
        serde_json::from_value((*snapshot).clone())
            .map_err(|e| CatalogError::ConfigError(format!("Invalid credentials block: {}", e)))
    }
}
