use crate::domain::error::SqlChatError;
use crate::presentation::messages::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub show_sql: bool,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub gemini: GeminiConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            locale: Locale::default(),
            show_sql: false,
            theme: default_theme(),
            logging: Logging::default(),
            gemini: GeminiConfig::default(),
        }
    }
}

impl Config {
    /// API key from the config file, falling back to `GEMINI_API_KEY`.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    pub fn resolve_api_key_with<F>(&self, env: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = self.gemini.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
            info!("{} loaded from config file", API_KEY_ENV);
            return Some(key.to_string());
        }
        let key = env(API_KEY_ENV).filter(|k| !k.trim().is_empty());
        if key.is_some() {
            info!("{} loaded from environment", API_KEY_ENV);
        }
        key
    }
}

// Defaults
fn default_database_path() -> PathBuf {
    PathBuf::from("student_db.sqlite")
}
fn default_theme() -> String {
    "temp".to_string()
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}
fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}
fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}
fn default_timeout_secs() -> u64 {
    60
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sqlchat").join("config.toml"))
}

pub fn load_config() -> Result<Config, SqlChatError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<Config, SqlChatError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        match toml::from_str::<Config>(&content) {
            Ok(config) => return Ok(config),
            Err(e) => {
                eprintln!(
                    "Warning: Failed to parse config file: {}. Using defaults.",
                    e
                );
            }
        }
    }

    Ok(Config::default())
}

pub fn generate_config_sample() -> Result<(), SqlChatError> {
    let path = get_config_path()
        .ok_or_else(|| SqlChatError::Config("Cannot determine config directory".to_string()))?;

    if write_config_sample(&path)? {
        println!("Generated config file at: {}", path.display());
    } else {
        eprintln!("Config file already exists at: {}", path.display());
    }
    Ok(())
}

/// Write the default config to `path`. Returns false if a file is already there.
pub fn write_config_sample(path: &Path) -> Result<bool, SqlChatError> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml_content = toml::to_string_pretty(&Config::default())
        .map_err(|e| SqlChatError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)
        .map_err(|e| SqlChatError::Config(format!("Failed to write config file: {}", e)))?;
    Ok(true)
}
