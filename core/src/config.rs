//! Read-only configuration for `HeroService`.

use url::Url;

use crate::error::ConfigError;

/// Environment variable consulted by [`HeroServiceConfig::from_env`].
pub const BASE_URL_ENV: &str = "HEROES_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

pub const DEFAULT_HEROES_PATH: &str = "api/heroes";

/// Where the heroes collection lives. Fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroServiceConfig {
    base_url: Url,
    heroes_path: String,
}

impl HeroServiceConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", parsed.scheme())));
        }
        Ok(Self {
            base_url: parsed,
            heroes_path: DEFAULT_HEROES_PATH.to_string(),
        })
    }

    /// Reads `HEROES_BASE_URL`, falling back to `http://localhost:3000`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    pub fn with_heroes_path(mut self, path: &str) -> Self {
        self.heroes_path = path.trim_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Collection endpoint, e.g. `http://localhost:3000/api/heroes`.
    pub fn heroes_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            self.heroes_path
        )
    }
}
