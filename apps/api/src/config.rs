use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::quiz::engine::{DEFAULT_TOP_TAGS, MAX_TOP_TAGS};

/// Which `ProfileMatcher` backs quiz results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    Overlap,
    Weighted,
}

impl MatchStrategy {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "overlap" => Ok(MatchStrategy::Overlap),
            "weighted" => Ok(MatchStrategy::Weighted),
            other => anyhow::bail!(
                "QUIZ_MATCH_STRATEGY must be 'overlap' or 'weighted', got '{other}'"
            ),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every setting has a default; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub top_tags: usize,
    pub match_strategy: MatchStrategy,
    pub session_idle_minutes: i64,
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let top_tags = parse_or(&lookup, "QUIZ_TOP_TAGS", DEFAULT_TOP_TAGS)?;
        if !(1..=MAX_TOP_TAGS).contains(&top_tags) {
            anyhow::bail!(
                "QUIZ_TOP_TAGS must be between 1 and {MAX_TOP_TAGS}, got {top_tags}"
            );
        }
        let session_idle_minutes = parse_or(&lookup, "SESSION_IDLE_MINUTES", 60i64)?;
        if session_idle_minutes <= 0 {
            anyhow::bail!("SESSION_IDLE_MINUTES must be positive");
        }

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080u16).context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            top_tags,
            match_strategy: match lookup("QUIZ_MATCH_STRATEGY") {
                Some(raw) => MatchStrategy::parse(&raw)?,
                None => MatchStrategy::Overlap,
            },
            session_idle_minutes,
            catalog_path: lookup("CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
