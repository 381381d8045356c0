/*!
 * Application configuration.
 *
 * Loading, validating and saving the JSON configuration file. Every field has
 * a serde default, so a partial file is enough.
 */

use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::fallback::translator::ENGLISH_REFERENCE;
use crate::providers::gemini::{GenerationConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Language used when a translation does not name one
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Remote assistant settings
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Local fallback settings
    #[serde(default)]
    pub fallback: FallbackConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Which backend answers assistant requests
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssistProvider {
    // @provider: Google Gemini
    #[default]
    Gemini,
    // @provider: local rules only, no network
    Local,
}

impl AssistProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Gemini => "Gemini",
            Self::Local => "Local",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Gemini => "gemini".to_string(),
            Self::Local => "local".to_string(),
        }
    }
}

impl std::fmt::Display for AssistProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for AssistProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "local" => Ok(Self::Local),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Remote assistant configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AssistantConfig {
    /// Backend to use
    #[serde(default)]
    pub provider: AssistProvider,

    /// Gemini service settings
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Whether successful remote results are cached for the session
    #[serde(default = "default_true")]
    pub cache_enabled: bool,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            provider: AssistProvider::default(),
            gemini: GeminiConfig::default(),
            cache_enabled: true,
        }
    }
}

/// Gemini service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeminiConfig {
    /// API key for the service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Model name (e.g., "gemini-2.0-flash")
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Service endpoint URL, without the API version path
    #[serde(default = "default_gemini_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retry count for failed requests
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    /// Backoff multiplier for retries (in milliseconds)
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Temperature parameter for text generation
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Top-k sampling
    #[serde(default = "default_top_k")]
    pub top_k: u32,

    /// Top-p sampling
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Maximum number of tokens to generate
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl GeminiConfig {
    /// Sampling parameters for the provider
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.temperature,
            top_k: self.top_k,
            top_p: self.top_p,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_gemini_model(),
            endpoint: default_gemini_endpoint(),
            timeout_secs: default_timeout_secs(),
            retry_count: default_retry_count(),
            retry_backoff_ms: default_retry_backoff_ms(),
            temperature: default_temperature(),
            top_k: default_top_k(),
            top_p: default_top_p(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

/// Local fallback configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct FallbackConfig {
    /// Detect repeated summary sentences by position instead of by text
    #[serde(default)]
    pub distinct_summary: bool,

    /// Extra translation languages, each aligned with the English reference
    /// words: Hello, Thank you, Goodbye, Yes, No, Please, Sorry
    #[serde(default)]
    pub extra_languages: BTreeMap<String, Vec<String>>,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

/// Highest accepted `retry_count`
pub const MAX_RETRY_COUNT: u32 = 10;

fn default_target_language() -> String {
    "Spanish".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retry_count() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    500 // doubled on each retry
}

fn default_temperature() -> f32 {
    0.4
}

fn default_top_k() -> u32 {
    32
}

fn default_top_p() -> f32 {
    0.95
}

fn default_max_output_tokens() -> u32 {
    1024
}

fn default_true() -> bool {
    true
}

fn default_gemini_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_gemini_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Config {
    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.target_language.trim().is_empty() {
            return Err(anyhow!("Target language must not be empty"));
        }

        if self.assistant.provider == AssistProvider::Gemini {
            let gemini = &self.assistant.gemini;

            if gemini.model.trim().is_empty() {
                return Err(anyhow!("Gemini model must not be empty"));
            }
            url::Url::parse(&gemini.endpoint)
                .map_err(|e| anyhow!("Invalid Gemini endpoint '{}': {}", gemini.endpoint, e))?;
            if gemini.timeout_secs == 0 {
                return Err(anyhow!("Gemini timeout must be at least one second"));
            }
            if gemini.retry_count > MAX_RETRY_COUNT {
                return Err(anyhow!(
                    "Retry count must be at most {}, got {}",
                    MAX_RETRY_COUNT,
                    gemini.retry_count
                ));
            }
            if !(0.0..=2.0).contains(&gemini.temperature) {
                return Err(anyhow!("Temperature must be between 0.0 and 2.0, got {}", gemini.temperature));
            }
            if !(gemini.top_p > 0.0 && gemini.top_p <= 1.0) {
                return Err(anyhow!("top_p must be in (0.0, 1.0], got {}", gemini.top_p));
            }
            if gemini.max_output_tokens == 0 {
                return Err(anyhow!("max_output_tokens must be greater than zero"));
            }
        }

        for (language, words) in &self.fallback.extra_languages {
            if words.len() != ENGLISH_REFERENCE.len() {
                return Err(anyhow!(
                    "Fallback language '{}' has {} words, expected {}",
                    language,
                    words.len(),
                    ENGLISH_REFERENCE.len()
                ));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            target_language: default_target_language(),
            assistant: AssistantConfig::default(),
            fallback: FallbackConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
