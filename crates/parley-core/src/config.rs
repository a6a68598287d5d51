use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ParleyError, Result};

/// Top-level configuration for Parley.
///
/// Loaded from `~/.parley/config.toml` by default. Every section falls back to
/// its defaults, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParleyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub nlu: NluConfig,
    #[serde(default)]
    pub entities: EntityConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub news: NewsConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

impl ParleyConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ParleyConfig = toml::from_str(&content)
            .map_err(|e| ParleyError::Config(format!("{}: {}", path.display(), e)))?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file if one exists at `path`.
    ///
    /// A missing file is `Ok(None)`. A file that exists but cannot be read or
    /// parsed is an error rather than a silent fallback to defaults.
    pub fn load_if_exists(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ParleyError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Request handling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Utterances longer than this many characters are rejected with a friendly reply.
    pub max_message_length: usize,
    /// Fixed seed for template selection. Unset means OS entropy per request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_message_length: 2000,
            seed: None,
        }
    }
}

/// Intent model training configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NluConfig {
    /// Upper bound on vocabulary size.
    pub max_features: usize,
    /// Longest word n-gram used as a feature.
    pub ngram_max: usize,
    /// Additive (Laplace) smoothing for the Naive Bayes estimates.
    pub smoothing: f64,
}

impl Default for NluConfig {
    fn default() -> Self {
        Self {
            max_features: 1000,
            ngram_max: 2,
            smoothing: 1.0,
        }
    }
}

/// Entity recognizer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    /// Directory holding `locations.txt`, `people.txt` and `organizations.txt`,
    /// one phrase per line. Missing files are skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gazetteer_dir: Option<String>,
    /// Extra location phrases.
    pub extra_locations: Vec<String>,
    /// Extra person names.
    pub extra_people: Vec<String>,
    /// Extra organization names.
    pub extra_organizations: Vec<String>,
}

/// OpenWeatherMap client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// API key. When unset, read from `api_key_env`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is unset.
    pub api_key_env: String,
    pub base_url: String,
    /// Unit system passed to the service: "metric", "imperial" or "standard".
    pub units: String,
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: "OPENWEATHER_API_KEY".to_string(),
            base_url: "https://api.openweathermap.org".to_string(),
            units: "metric".to_string(),
            timeout_secs: 10,
        }
    }
}

impl WeatherConfig {
    /// Resolve the API key: config value first, then the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(self.api_key.as_deref(), &self.api_key_env)
    }
}

/// NewsAPI client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// API key. When unset, read from `api_key_env`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is unset.
    pub api_key_env: String,
    pub base_url: String,
    /// Default headline category.
    pub category: String,
    /// Default two-letter country code.
    pub country: String,
    /// Number of headlines to fetch.
    pub limit: u32,
    pub timeout_secs: u64,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: "NEWS_API_KEY".to_string(),
            base_url: "https://newsapi.org".to_string(),
            category: "general".to_string(),
            country: "us".to_string(),
            limit: 5,
            timeout_secs: 10,
        }
    }
}

impl NewsConfig {
    /// Resolve the API key: config value first, then the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(self.api_key.as_deref(), &self.api_key_env)
    }
}

/// Wikipedia (MediaWiki) lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    pub base_url: String,
    /// Number of search candidates requested.
    pub candidates: u32,
    /// Number of sentences kept from the article intro.
    pub sentences: usize,
    pub timeout_secs: u64,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://en.wikipedia.org".to_string(),
            candidates: 3,
            sentences: 3,
            timeout_secs: 10,
        }
    }
}

fn resolve_key(configured: Option<&str>, env_var: &str) -> Option<String> {
    configured
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .or_else(|| {
            std::env::var(env_var)
                .ok()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
        })
}
