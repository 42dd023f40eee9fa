//! Runtime settings: API key, endpoint, model, and timeout, resolved from
//! the environment once at startup.

use std::env;
use std::time::Duration;

use url::Url;

use crate::app::logging::LogLevel;
use crate::constants::{
    API_KEY_VARS, BASE_URL_VARS, DEFAULT_BASE_URL, DEFAULT_MODEL, LOG_LEVEL_VAR, MODEL_VARS,
    TIMEOUT_VAR,
};
use crate::error::ConfigError;
use crate::util::{lookup_first, normalize_url};

/// Everything the completion client needs, built once and passed down explicitly.
#[derive(Clone, Debug)]
pub struct Settings {
    pub api_key: String,
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub model: String,
    pub request_timeout: Option<Duration>,
    pub log_level: LogLevel,
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup_first(API_KEY_VARS, &lookup)
            .map(|key| key.trim().to_string())
            .ok_or_else(|| ConfigError::MissingApiKey {
                vars: API_KEY_VARS.iter().map(|v| v.to_string()).collect(),
            })?;

        let raw_base =
            lookup_first(BASE_URL_VARS, &lookup).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(&raw_base)?;

        let model = lookup_first(MODEL_VARS, &lookup)
            .map(|model| model.trim().to_string())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let request_timeout = match lookup_first(&[TIMEOUT_VAR], &lookup) {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        let log_level = lookup_first(&[LOG_LEVEL_VAR], &lookup)
            .and_then(|raw| LogLevel::parse(&raw))
            .unwrap_or(LogLevel::Warn);

        Ok(Settings {
            api_key,
            base_url,
            model,
            request_timeout,
            log_level,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let normalized = normalize_url(raw.trim());
    Url::parse(&normalized).map_err(|source| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;
    Ok(normalized.trim_end_matches('/').to_string())
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            value: raw.to_string(),
        }),
    }
}
