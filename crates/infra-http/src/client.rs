// HTTP Client Setup

use eurovisor_core::error::{AppError, Result};
use std::time::Duration;

/// Public contest API
pub const DEFAULT_API_BASE_URL: &str = "https://eurovisionapi.runasp.net/api";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("eurovisor/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Base URL without trailing slash
    pub fn normalized_base_url(&self) -> Result<String> {
        let base = self.base_url.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "API base URL must be http(s): {}",
                self.base_url
            )));
        }
        Ok(base.to_string())
    }
}

/// Create the shared reqwest client (connection pooling, UA, timeout)
pub fn build_client(config: &HttpApiConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout)
        .build()
        .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_base_url() {
        let config = HttpApiConfig::default().with_base_url("http://localhost:8080/api/");
        assert_eq!(
            config.normalized_base_url().unwrap(),
            "http://localhost:8080/api"
        );

        let bad = HttpApiConfig::default().with_base_url("ftp://example.org");
        assert!(matches!(bad.normalized_base_url(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_build_client() {
        tokio_test::assert_ok!(build_client(&HttpApiConfig::default()));
    }
}
