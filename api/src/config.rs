//! Client configuration, resolved once at startup and handed to [`crate::ApiClient`].

use tracing::debug;

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "DATAVIEWER_API_BASE_URL";

/// Backend address used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:19006/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config for an explicit base URL. Trailing slashes are dropped so
    /// endpoint paths can always be appended with a leading `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw: String = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    /// Resolve the base URL from the process environment (and a `.env` file if present).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        // A missing .env is the normal case outside development.
        dotenvy::dotenv().ok();
        let config = Self::from_override(std::env::var(BASE_URL_ENV).ok());
        debug!(base_url = %config.base_url, "resolved api config");
        config
    }

    /// Browsers have no process environment; the override is captured at build time.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        let config = Self::from_override(option_env!("DATAVIEWER_API_BASE_URL").map(str::to_owned));
        debug!(base_url = %config.base_url, "resolved api config");
        config
    }

    fn from_override(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/data/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
