use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Per-repo config file name, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "psychotech.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provider {
    Anthropic,
    #[serde(rename = "openai")]
    OpenAI,
    #[serde(rename = "openai-compatible")]
    OpenAICompatible,
    Gemini,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Anthropic => "anthropic",
            Provider::OpenAI => "openai",
            Provider::OpenAICompatible => "openai-compatible",
            Provider::Gemini => "gemini",
        }
    }

    /// Env var holding the API key when `api_key_env` is not set.
    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            Provider::Anthropic => "ANTHROPIC_API_KEY",
            Provider::OpenAI | Provider::OpenAICompatible => "OPENAI_API_KEY",
            Provider::Gemini => "GEMINI_API_KEY",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "anthropic" => Ok(Provider::Anthropic),
            "openai" => Ok(Provider::OpenAI),
            "openai-compatible" => Ok(Provider::OpenAICompatible),
            "gemini" => Ok(Provider::Gemini),
            other => anyhow::bail!("Unknown LLM provider: {}", other),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub provider: Provider,
    pub model: String,
    /// Env var holding the API key. `"none"` disables the key entirely;
    /// unset means the provider's conventional variable.
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>, // For OpenAI-compatible APIs

    /// Optional: Override max_tokens for LLM requests
    /// If not specified, uses provider-specific defaults:
    /// - anthropic: 4096
    /// - openai: 4096
    /// - openai-compatible (ollama): 16384
    /// - gemini: 8192
    #[serde(default)]
    pub max_tokens: Option<u32>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: Provider::Anthropic,
            model: "claude-sonnet-4-20250514".to_string(),
            api_key_env: None,
            base_url: None,
            max_tokens: None, // Use provider default (4096 for anthropic)
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
        }
    }
}

impl LlmConfig {
    /// Get max_tokens value, using provider-specific default if not specified
    pub fn get_max_tokens(&self) -> u32 {
        if let Some(tokens) = self.max_tokens {
            return tokens;
        }

        match self.provider {
            Provider::Anthropic => 4096,
            Provider::OpenAI => 4096,
            Provider::OpenAICompatible => 16384, // ollama and similar
            Provider::Gemini => 8192,
        }
    }

    /// Name of the env var the API key is read from, if any.
    pub fn api_key_var(&self) -> Option<&str> {
        match self.api_key_env.as_deref() {
            Some(var) if var.eq_ignore_ascii_case("none") => None,
            Some(var) => Some(var),
            None => Some(self.provider.default_api_key_env()),
        }
    }

    /// Get API key from the configured (or inferred) environment variable
    pub fn get_api_key(&self) -> Result<String> {
        let Some(env_var) = self.api_key_var() else {
            return Ok(String::new());
        };

        // openai-compatible: try env var but don't error if missing
        // (local models like Ollama don't need keys, but gateways like OpenRouter do)
        if self.provider == Provider::OpenAICompatible {
            return Ok(env::var(env_var).unwrap_or_default());
        }

        env::var(env_var)
            .map_err(|_| anyhow::anyhow!("API key not found in environment variable: {}", env_var))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Copy every newly generated analogy to the clipboard
    #[serde(default)]
    pub copy_on_success: bool,
}

impl Config {
    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        // If explicit path provided, use it
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(&config_path);
        }

        if Path::new(LOCAL_CONFIG_FILE).exists() {
            debug!("Loading config from ./{}", LOCAL_CONFIG_FILE);
            return Self::load_from_path(LOCAL_CONFIG_FILE);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("psychotech").join("config.toml");
            if config_path.exists() {
                debug!("Loading config from {:?}", config_path);
                return Self::load_from_path(&config_path);
            }
        }

        debug!("Using default config");
        Ok(Self::default())
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }
}
