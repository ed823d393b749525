//! Conversion API Configuration
//!
//! Settings for the third-party conversion API. Only the credential check is
//! live; the simulated converter never calls the endpoint.

use std::time::Duration;

/// Build-time environment variable holding the API credential
pub const API_KEY_VAR: &str = "ILOVEPDF_API_KEY";

pub const DEFAULT_ENDPOINT: &str = "https://api.ilovepdf.com/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub timeout: Duration,
    pub max_retries: u32,
    /// How long the simulated conversion takes
    pub simulated_delay: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(60),
            max_retries: 3,
            simulated_delay: Duration::from_millis(2000),
        }
    }
}

impl ApiConfig {
    /// Read the credential baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::default().with_api_key(option_env!("ILOVEPDF_API_KEY"))
    }

    /// Blank keys count as missing.
    pub fn with_api_key(mut self, key: Option<&str>) -> Self {
        self.api_key = key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.max_retries, 3);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_blank_key_is_missing() {
        assert!(!ApiConfig::default().with_api_key(Some("  ")).has_api_key());
        assert!(!ApiConfig::default().with_api_key(None).has_api_key());
        let config = ApiConfig::default().with_api_key(Some(" pk_live "));
        assert_eq!(config.api_key.as_deref(), Some("pk_live"));
    }
}
