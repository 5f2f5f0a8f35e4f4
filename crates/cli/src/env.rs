// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration: CLI flag > environment variable > config file > default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_URL: &str = "http://localhost:8000";
pub const DEFAULT_POLL_MS: u64 = 5_000;
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("page size must be at least 1")]
    ZeroPageSize,

    #[error("poll interval must be at least 1ms")]
    ZeroPollInterval,
}

/// Settings from `config.toml`; every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub url: Option<String>,
    pub job_poll_ms: Option<u64>,
    pub slave_poll_ms: Option<u64>,
    pub page_size: Option<usize>,
    pub timeout_ms: Option<u64>,
}

impl FileConfig {
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        toml::from_str(&text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }
}

/// Values given on the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub url: Option<String>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Coordinator base URL, without trailing slash
    pub url: String,
    pub job_poll: Duration,
    pub slave_poll: Duration,
    pub page_size: usize,
    pub timeout: Duration,
}

impl Config {
    /// Load the config file (if any) and apply environment and CLI overrides.
    pub fn load(overrides: &Overrides) -> Result<Self, ConfigError> {
        let file = match config_path() {
            Some(path) if path.exists() => FileConfig::read(&path)?,
            _ => FileConfig::default(),
        };
        Self::resolve(&file, overrides)
    }

    pub fn resolve(file: &FileConfig, overrides: &Overrides) -> Result<Self, ConfigError> {
        let url = overrides
            .url
            .clone()
            .or_else(|| std::env::var("FV_URL").ok().filter(|s| !s.is_empty()))
            .or_else(|| file.url.clone())
            .unwrap_or_else(|| DEFAULT_URL.to_string());

        let page_size = overrides
            .page_size
            .or_else(|| env_parse("FV_PAGE_SIZE"))
            .or(file.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }

        let job_poll_ms =
            env_parse("FV_JOB_POLL_MS").or(file.job_poll_ms).unwrap_or(DEFAULT_POLL_MS);
        let slave_poll_ms =
            env_parse("FV_SLAVE_POLL_MS").or(file.slave_poll_ms).unwrap_or(DEFAULT_POLL_MS);
        if job_poll_ms == 0 || slave_poll_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }

        let timeout_ms =
            env_parse("FV_TIMEOUT_MS").or(file.timeout_ms).unwrap_or(DEFAULT_TIMEOUT_MS);

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            job_poll: Duration::from_millis(job_poll_ms),
            slave_poll: Duration::from_millis(slave_poll_ms),
            page_size,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn env_parse<T: std::str::FromStr>(var: &str) -> Option<T> {
    std::env::var(var).ok().and_then(|s| s.trim().parse().ok())
}

/// Resolve config file: FV_CONFIG > XDG_CONFIG_HOME/fv/config.toml > ~/.config/fv/config.toml
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("FV_CONFIG") {
        return Some(PathBuf::from(path));
    }
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join("fv/config.toml"));
    }
    dirs::home_dir().map(|home| home.join(".config/fv/config.toml"))
}

/// Resolve state directory: FV_STATE_DIR > XDG_STATE_HOME/fv > ~/.local/state/fv
pub fn state_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("FV_STATE_DIR") {
        return Some(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Some(PathBuf::from(xdg).join("fv"));
    }
    dirs::home_dir().map(|home| home.join(".local/state/fv"))
}

/// Log filter directive (default `warn`).
pub fn log_filter() -> String {
    std::env::var("FV_LOG").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| "warn".to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
