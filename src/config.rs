use crate::errors::{TalkError, TalkResult};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

pub const CHAT_MESSAGE_PATH: &str = "/chat/message";

/// Client configuration. The chat endpoint is never hard-coded: it comes from
/// the config file or the `TALKNATIVE_URL` environment variable, with the env
/// var taking precedence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads the config file if present, creating a default one otherwise,
    /// then applies environment overrides and validates the result.
    pub fn load() -> TalkResult<Self> {
        let config_path = config_path()?;

        let mut config = if config_path.exists() {
            let config_str = fs::read_to_string(&config_path).map_err(|e| {
                TalkError::config_error(format!("failed to read config file: {}", e))
            })?;
            serde_json::from_str(&config_str)
                .map_err(|e| TalkError::config_error(format!("failed to parse config: {}", e)))?
        } else {
            let config = Config::default();
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    TalkError::config_error(format!("failed to create config directory: {}", e))
                })?;
            }
            let config_str = serde_json::to_string_pretty(&config)
                .map_err(|e| TalkError::config_error(format!("failed to serialize config: {}", e)))?;
            fs::write(&config_path, config_str).map_err(|e| {
                TalkError::config_error(format!("failed to write config file: {}", e))
            })?;
            config
        };

        if let Ok(url) = env::var("TALKNATIVE_URL") {
            config.base_url = url;
        }
        if let Ok(level) = env::var("TALKNATIVE_LOG") {
            config.log_level = level;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TalkResult<()> {
        if self.base_url.is_empty() {
            return Err(TalkError::config_error("chat endpoint URL is required"));
        }

        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| TalkError::config_error(format!("invalid endpoint URL: {}", e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(TalkError::config_error(format!(
                "unsupported endpoint scheme: {}",
                url.scheme()
            )));
        }

        Ok(())
    }

    /// Full URL of the message endpoint, tolerating a trailing slash on the
    /// configured base.
    pub fn message_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            CHAT_MESSAGE_PATH
        )
    }
}

fn config_path() -> TalkResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| TalkError::config_error("could not determine config directory"))?;
    Ok(config_dir.join("talknative").join("config.json"))
}
