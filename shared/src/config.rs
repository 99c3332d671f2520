use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),
}

/// Gateway configuration, read once at process start. The service role key
/// is a privileged credential and must never appear in a response body.
#[derive(Debug, Clone)]
pub struct Config {
    pub identity_api_url: String,
    pub service_role_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let identity_api_url = env::var("IDENTITY_API_URL")
            .map_err(|_| ConfigError::MissingVar("IDENTITY_API_URL"))?;
        let service_role_key = env::var("SERVICE_ROLE_KEY")
            .map_err(|_| ConfigError::MissingVar("SERVICE_ROLE_KEY"))?;
        Ok(Self::new(identity_api_url, service_role_key))
    }

    pub fn new(identity_api_url: impl Into<String>, service_role_key: impl Into<String>) -> Self {
        // Tolerate a trailing slash on the configured endpoint
        let mut identity_api_url = identity_api_url.into();
        while identity_api_url.ends_with('/') {
            identity_api_url.pop();
        }
        Self {
            identity_api_url,
            service_role_key: service_role_key.into(),
        }
    }
}
