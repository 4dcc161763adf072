//! # Configuration
//!
//! The console talks to exactly one backend. Its base URL is the only required
//! setting and the only one read from the environment.

use crate::error::ConfigError;
use reqwest::Url;

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "CONTENT_CONSOLE_API_URL";

/// Page size used by list controllers unless overridden.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    base_url: Url,
    page_size: u32,
}

impl ConsoleConfig {
    /// Validates `base_url` (absolute `http`/`https` URL).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            value: base_url.to_string(),
            reason,
        };
        let url = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }
        Ok(Self {
            base_url: url,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Reads the base URL from [`BASE_URL_ENV`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = std::env::var(BASE_URL_ENV).map_err(|_| ConfigError::Missing(BASE_URL_ENV))?;
        Self::new(&value)
    }

    /// Overrides the list page size (minimum 1).
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_urls() {
        let config = ConsoleConfig::new("https://admin-api.example.com").unwrap();
        assert_eq!(config.base_url().host_str(), Some("admin-api.example.com"));
        assert_eq!(config.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn rejects_relative_and_non_http_urls() {
        assert!(matches!(
            ConsoleConfig::new("/api"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            ConsoleConfig::new("ftp://files.example.com"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn page_size_is_at_least_one() {
        let config = ConsoleConfig::new("http://localhost:5000")
            .unwrap()
            .with_page_size(0);
        assert_eq!(config.page_size(), 1);
    }
}
