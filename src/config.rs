use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dialogue: DialogueSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Text generation service; without an API key every call uses fallbacks
#[derive(Debug, Clone, Deserialize)]
pub struct DialogueSettings {
    #[serde(default = "default_dialogue_endpoint")]
    pub endpoint: String,
    pub api_key: Option<String>,
    #[serde(default = "default_dialogue_model")]
    pub model: String,
    #[serde(default = "default_dialogue_timeout")]
    pub timeout_secs: u64,
    /// Questions, avatar chat and quest interactions
    #[serde(default = "default_dialogue_temperature")]
    pub temperature: f32,
    #[serde(default = "default_turn_temperature")]
    pub turn_temperature: f32,
}

impl Default for DialogueSettings {
    fn default() -> Self {
        Self {
            endpoint: default_dialogue_endpoint(),
            api_key: None,
            model: default_dialogue_model(),
            timeout_secs: default_dialogue_timeout(),
            temperature: default_dialogue_temperature(),
            turn_temperature: default_turn_temperature(),
        }
    }
}

fn default_dialogue_endpoint() -> String { "https://api.openai.com/v1".to_string() }
fn default_dialogue_model() -> String { "gpt-4.1-mini".to_string() }
fn default_dialogue_timeout() -> u64 { 30 }
fn default_dialogue_temperature() -> f32 { 0.8 }
fn default_turn_temperature() -> f32 { 0.7 }

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// Shared L2 store; sessions stay in-process when unset
    pub redis_url: Option<String>,
    #[serde(default = "default_l1_cache_size")]
    pub l1_cache_size: u64,
    #[serde(default = "default_session_ttl")]
    pub ttl_secs: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            redis_url: None,
            l1_cache_size: default_l1_cache_size(),
            ttl_secs: default_session_ttl(),
        }
    }
}

fn default_l1_cache_size() -> u64 { 10_000 }
fn default_session_ttl() -> u64 { 7 * 24 * 3600 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default, config/local)
    /// 3. Environment variables (prefixed with LUME__)
    /// 4. OPENAI_API_KEY, OPENAI_MODEL and REDIS_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., LUME__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("LUME")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }
}

/// Apply the conventional un-prefixed variables on top of everything else
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let overrides = [
        ("dialogue.api_key", "OPENAI_API_KEY"),
        ("dialogue.model", "OPENAI_MODEL"),
        ("session.redis_url", "REDIS_URL"),
    ];

    let mut builder = Config::builder().add_source(settings);
    for (path, var) in overrides {
        if let Ok(value) = env::var(var) {
            builder = builder.set_override(path, value)?;
        }
    }

    builder.build()
}
