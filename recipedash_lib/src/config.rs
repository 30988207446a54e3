//! Runtime configuration read from the environment.

use std::time::Duration;

use recipes_api::Client;
use url::Url;

use crate::error::DashboardError;
use crate::validation;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_PAGE_SIZE: i64 = 15;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const BASE_URL_VAR: &str = "RECIPEDASH_BASE_URL";
pub const PAGE_SIZE_VAR: &str = "RECIPEDASH_PAGE_SIZE";
pub const TIMEOUT_VAR: &str = "RECIPEDASH_TIMEOUT_SECS";

/// Where the API lives and how the dashboard pages through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub base_url: String,
    pub page_size: i64,
    pub timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl DashboardConfig {
    /// Reads `RECIPEDASH_*` variables. Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let base_url = lookup(BASE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.base_url);
        let page_size = lookup(PAGE_SIZE_VAR)
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|v| validation::validate_limit(*v).is_ok())
            .unwrap_or(defaults.page_size);
        let timeout = lookup(TIMEOUT_VAR)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|v| *v > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        Self {
            base_url,
            page_size,
            timeout,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Checks that the base URL is an absolute http(s) URL and the page size is in range.
    pub fn validate(&self) -> Result<(), DashboardError> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            DashboardError::Config(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(DashboardError::Config(format!(
                "base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if url.cannot_be_a_base() {
            return Err(DashboardError::Config(format!(
                "base URL '{}' cannot carry a path",
                self.base_url
            )));
        }
        validation::validate_limit(self.page_size)
            .map_err(|e| DashboardError::Config(e.to_string()))?;
        if self.timeout.is_zero() {
            return Err(DashboardError::Config("timeout must be positive".to_string()));
        }
        Ok(())
    }

    pub fn client(&self) -> Client {
        Client::with_timeout(&self.base_url, self.timeout)
    }
}
