//! Host configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the asset API; detail requests answer 503 while unset.
    pub backend_url: Option<String>,
    pub connect_timeout_secs: u64,
    /// Directory holding `assets/images/` and `videos/`; defaults to the Leptos site root.
    pub static_dir: Option<PathBuf>,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ASSET_API_URL`: `http://` or `https://` base URL of the asset API
    /// - `ASSET_API_CONNECT_TIMEOUT_SECS`: default 10
    /// - `ASSET_STATIC_DIR`: static media directory
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or("PORT", var("PORT"), DEFAULT_PORT)?;
        let connect_timeout_secs =
            parse_or("ASSET_API_CONNECT_TIMEOUT_SECS", var("ASSET_API_CONNECT_TIMEOUT_SECS"), DEFAULT_CONNECT_TIMEOUT_SECS)?;
        let backend_url = var("ASSET_API_URL").map(parse_backend_url).transpose()?;
        let static_dir = var("ASSET_STATIC_DIR").map(PathBuf::from);

        Ok(Self { port, backend_url, connect_timeout_secs, static_dir })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn parse_backend_url(raw: String) -> Result<String, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::Invalid { var: "ASSET_API_URL", value: raw });
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
