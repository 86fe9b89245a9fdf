//! Generator configuration.
//!
//! Use the builder methods, or [`GeneratorConfig::from_env`] to read the
//! `SNAPSHOT_*` environment variables.
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `SNAPSHOT_API_KEY` (or `GEMINI_API_KEY`) | `api_key` | empty |
//! | `SNAPSHOT_MODEL` | `model` | `gemini-1.5-flash` |
//! | `SNAPSHOT_BASE_URL` | `base_url` | `https://generativelanguage.googleapis.com` |
//! | `SNAPSHOT_STRATEGY` | `strategy` | `single` |
//! | `SNAPSHOT_TIMEOUT_SECS` | `request_timeout` | none |

use std::time::Duration;
use thiserror::Error;

use crate::orchestrator::GenerationStrategy;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub const API_KEY_VAR: &str = "SNAPSHOT_API_KEY";
pub const FALLBACK_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "SNAPSHOT_MODEL";
pub const BASE_URL_VAR: &str = "SNAPSHOT_BASE_URL";
pub const STRATEGY_VAR: &str = "SNAPSHOT_STRATEGY";
pub const TIMEOUT_VAR: &str = "SNAPSHOT_TIMEOUT_SECS";

/// Invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown generation strategy '{0}' (expected 'single' or 'multi')")]
    InvalidStrategy(String),

    #[error("Invalid request timeout '{0}' (expected whole seconds greater than zero)")]
    InvalidTimeout(String),

    #[error("Could not build HTTP client: {0}")]
    HttpClient(String),
}

/// Settings for building a [`ContentGenerator`](crate::ContentGenerator).
///
/// # Example
///
/// ```ignore
/// use snapshot::config::GeneratorConfig;
/// use snapshot::GenerationStrategy;
///
/// let config = GeneratorConfig::default()
///     .with_api_key("AIza...")
///     .with_strategy(GenerationStrategy::MultiCall);
/// ```
#[derive(Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Credential for the model service. Empty means calls fail with
    /// `ServiceError::MissingApiKey`.
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// API root, without the `/v1beta` path
    pub base_url: String,
    /// Which pipeline to run
    pub strategy: GenerationStrategy,
    /// Upper bound on each model-service HTTP call
    pub request_timeout: Option<Duration>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            strategy: GenerationStrategy::default(),
            request_timeout: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_strategy(mut self, strategy: GenerationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its
    /// value. Unset and empty values fall back to defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(key) = get(API_KEY_VAR).or_else(|| get(FALLBACK_API_KEY_VAR)) {
            config.api_key = key.trim().to_string();
        }
        if let Some(model) = get(MODEL_VAR) {
            config.model = model.trim().to_string();
        }
        if let Some(base_url) = get(BASE_URL_VAR) {
            config.base_url = base_url.trim().to_string();
        }
        if let Some(strategy) = get(STRATEGY_VAR) {
            config.strategy = strategy.parse()?;
        }
        if let Some(timeout) = get(TIMEOUT_VAR) {
            config.request_timeout = Some(parse_timeout(&timeout)?);
        }

        Ok(config)
    }
}

impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &if self.has_api_key() { "<set>" } else { "<unset>" })
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("strategy", &self.strategy)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}
