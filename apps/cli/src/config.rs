use std::path::PathBuf;
use std::str::FromStr;

use rentslip_core::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(Error::InvalidConfigValue(format!(
                "RENTSLIP_LOG_FORMAT must be 'text' or 'json', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_path: PathBuf,
    pub export_dir: PathBuf,
    pub log_format: LogFormat,
}

impl Config {
    /// Reads configuration from the environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_path = lookup("RENTSLIP_STORE_PATH")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "./data/rentslip.json".into());
        let export_dir = lookup("RENTSLIP_EXPORT_DIR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| ".".into());
        let log_format = lookup("RENTSLIP_LOG_FORMAT")
            .map(|v| v.parse())
            .transpose()?
            .unwrap_or(LogFormat::Text);

        Ok(Self {
            store_path: PathBuf::from(store_path),
            export_dir: PathBuf::from(export_dir),
            log_format,
        })
    }
}
