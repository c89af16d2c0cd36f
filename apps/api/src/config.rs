use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Which `JobMatcher` backend to run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatcherKind {
    Catalog,
    Skills,
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub generation_delay: Duration,
    pub import_delay: Duration,
    pub preferences_path: PathBuf,
    pub job_catalog_path: Option<PathBuf>,
    pub job_matcher: MatcherKind,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            generation_delay: millis(&lookup, "GENERATION_DELAY_MS", 2000)?,
            import_delay: millis(&lookup, "IMPORT_DELAY_MS", 1500)?,
            preferences_path: lookup("PREFERENCES_PATH")
                .unwrap_or_else(|| "preferences.json".to_string())
                .into(),
            job_catalog_path: lookup("JOB_CATALOG_PATH").map(PathBuf::from),
            job_matcher: match lookup("JOB_MATCHER").as_deref() {
                None | Some("catalog") => MatcherKind::Catalog,
                Some("skills") => MatcherKind::Skills,
                Some(other) => bail!("JOB_MATCHER must be 'catalog' or 'skills', got '{other}'"),
            },
        })
    }
}

fn millis(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> Result<Duration> {
    let ms = match lookup(key) {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a whole number of milliseconds"))?,
        None => default,
    };
    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.generation_delay, Duration::from_millis(2000));
        assert_eq!(config.import_delay, Duration::from_millis(1500));
        assert_eq!(config.preferences_path, PathBuf::from("preferences.json"));
        assert!(config.job_catalog_path.is_none());
        assert_eq!(config.job_matcher, MatcherKind::Catalog);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("GENERATION_DELAY_MS", "0"),
            ("JOB_MATCHER", "skills"),
            ("JOB_CATALOG_PATH", "/etc/jobs.json"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.generation_delay, Duration::ZERO);
        assert_eq!(config.job_matcher, MatcherKind::Skills);
        assert_eq!(config.job_catalog_path, Some(PathBuf::from("/etc/jobs.json")));
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("GENERATION_DELAY_MS", "-5")]).is_err());
        let err = config_from(&[("JOB_MATCHER", "llm")]).unwrap_err();
        assert!(err.to_string().contains("JOB_MATCHER"));
    }
}
