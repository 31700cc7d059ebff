use std::env;
use std::time::Duration;

use url::Url;

use crate::debounce::DEFAULT_DELAY;
use crate::error::{Error, Result};

pub const URL_VAR: &str = "GOLINKS_URL";
pub const DEBOUNCE_VAR: &str = "GOLINKS_DEBOUNCE_MS";
pub const DEFAULT_URL: &str = "http://localhost/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: Url,
    pub debounce: Duration,
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(env::var(URL_VAR).ok(), env::var(DEBOUNCE_VAR).ok())
    }

    pub fn from_vars(base_url: Option<String>, debounce_ms: Option<String>) -> Result<Self> {
        let base_url = match base_url {
            Some(raw) => parse_url(&raw)?,
            None => parse_url(DEFAULT_URL)?,
        };
        let debounce = match debounce_ms {
            Some(raw) => parse_millis(&raw)?,
            None => DEFAULT_DELAY,
        };
        Ok(Self { base_url, debounce })
    }
}

pub fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw.trim()).map_err(|err| Error::Config {
        key: URL_VAR,
        message: format!("'{raw}': {err}"),
    })
}

pub fn parse_millis(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|err| Error::Config {
            key: DEBOUNCE_VAR,
            message: format!("'{raw}': {err}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_URL);
        assert_eq!(config.debounce, Duration::from_millis(2000));
    }

    #[test]
    fn reads_given_values() {
        let config =
            Config::from_vars(Some("https://go.example.com".into()), Some(" 250 ".into())).unwrap();
        assert_eq!(config.base_url.as_str(), "https://go.example.com/");
        assert_eq!(config.debounce, Duration::from_millis(250));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_vars(Some("not a url".into()), None),
            Err(Error::Config { key: URL_VAR, .. })
        ));
        assert!(matches!(
            Config::from_vars(None, Some("-5".into())),
            Err(Error::Config { key: DEBOUNCE_VAR, .. })
        ));
    }
}
