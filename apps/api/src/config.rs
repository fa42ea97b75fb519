use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Budget for a single generation call when `GENERATION_TIMEOUT_SECS` is unset.
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 40;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Wall-clock budget for the upstream generation call.
    pub generation_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            generation_timeout: parse_timeout_secs(std::env::var("GENERATION_TIMEOUT_SECS").ok())?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Parses the generation budget. Unset means the default; zero is rejected.
pub fn parse_timeout_secs(raw: Option<String>) -> Result<Duration> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs(DEFAULT_GENERATION_TIMEOUT_SECS));
    };

    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("GENERATION_TIMEOUT_SECS must be a whole number, got '{raw}'"))?;
    if secs == 0 {
        bail!("GENERATION_TIMEOUT_SECS must be greater than zero");
    }

    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_defaults_to_forty_seconds() {
        assert_eq!(parse_timeout_secs(None).unwrap(), Duration::from_secs(40));
    }

    #[test]
    fn test_timeout_parses_whitespace_padded_value() {
        assert_eq!(
            parse_timeout_secs(Some(" 15 ".to_string())).unwrap(),
            Duration::from_secs(15)
        );
    }

    #[test]
    fn test_timeout_rejects_zero_and_garbage() {
        assert!(parse_timeout_secs(Some("0".to_string())).is_err());
        assert!(parse_timeout_secs(Some("soon".to_string())).is_err());
        assert!(parse_timeout_secs(Some("-3".to_string())).is_err());
    }
}
