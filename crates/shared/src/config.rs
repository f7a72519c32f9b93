//! Application configuration management.

use serde::Deserialize;

use crate::types::DEFAULT_PAGE_SIZE;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Pager rendering defaults.
    #[serde(default)]
    pub pager: PagerConfig,
    /// Demo catalogue configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Pager configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PagerConfig {
    /// Number of page links shown around the current page.
    #[serde(default = "default_pages_to_display")]
    pub pages_to_display: u32,
    /// Upper bound for a requested number of page links.
    #[serde(default = "default_max_pages_to_display")]
    pub max_pages_to_display: u32,
    /// Page size used when the request carries none (or zero).
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    /// Upper bound for a requested page size.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
    /// Render the first/last links.
    #[serde(default = "default_true")]
    pub first_last_navigation: bool,
    /// Render the skip-back/skip-forward links.
    #[serde(default = "default_true")]
    pub skip_navigation: bool,
}

fn default_pages_to_display() -> u32 {
    5
}

fn default_max_pages_to_display() -> u32 {
    25
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> u32 {
    100
}

fn default_true() -> bool {
    true
}

impl PagerConfig {
    /// Caps a requested number of page links at `max_pages_to_display`.
    ///
    /// Zero passes through; the link builder reads it as its own default.
    #[must_use]
    pub fn clamp_pages_to_display(&self, requested: u32) -> u32 {
        requested.min(self.max_pages_to_display.max(1))
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            pages_to_display: default_pages_to_display(),
            max_pages_to_display: default_max_pages_to_display(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            first_last_navigation: true,
            skip_navigation: true,
        }
    }
}

/// Demo catalogue configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Number of products generated at startup.
    #[serde(default = "default_seed_items")]
    pub seed_items: u32,
    /// Seed for the product generator, so restarts show the same catalogue.
    #[serde(default = "default_rng_seed")]
    pub rng_seed: u64,
}

fn default_seed_items() -> u32 {
    500
}

fn default_rng_seed() -> u64 {
    42
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_items: default_seed_items(),
            rng_seed: default_rng_seed(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PAGEWISE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
