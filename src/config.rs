use std::env;
use std::path::PathBuf;

use log::{debug, error, info};
use strum::VariantNames;

use crate::error::{BotError, Result};
use crate::intent::{MatchConfig, Similarity};

/// Tokens shorter than this are rejected before connecting.
const MIN_TOKEN_LEN: usize = 30;

const DEFAULT_PORT: u16 = 10000;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub keywords_file: Option<PathBuf>,
    pub matching: MatchConfig,
    pub keepalive_enabled: bool,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        let discord_token = env::var("DISCORD_TOKEN").map_err(|e| {
            error!("Failed to load DISCORD_TOKEN from environment: {e}");
            e
        })?;
        validate_token(&discord_token)?;

        let keywords_file = env::var("KEYWORDS_FILE").ok().map(PathBuf::from);

        let defaults = MatchConfig::default();
        let fuzzy_enabled = optional_var("FUZZY_ENABLED")
            .map(|v| parse_bool("FUZZY_ENABLED", &v))
            .transpose()?
            .unwrap_or(defaults.fuzzy_enabled);
        let fuzzy_threshold = optional_var("FUZZY_THRESHOLD")
            .map(|v| parse_threshold(&v))
            .transpose()?
            .unwrap_or(defaults.fuzzy_threshold);
        let similarity = optional_var("SIMILARITY")
            .map(|v| {
                v.parse::<Similarity>().map_err(|_| {
                    BotError::Config(format!(
                        "unknown SIMILARITY '{v}', expected one of {:?}",
                        Similarity::VARIANTS
                    ))
                })
            })
            .transpose()?
            .unwrap_or(defaults.similarity);

        let keepalive_enabled = optional_var("KEEPALIVE_ENABLED")
            .map(|v| parse_bool("KEEPALIVE_ENABLED", &v))
            .transpose()?
            .unwrap_or(true);
        let port = optional_var("PORT")
            .map(|v| parse_port(&v))
            .transpose()?
            .unwrap_or(DEFAULT_PORT);

        info!("Configuration loaded successfully");
        debug!("Discord token length: {} characters", discord_token.len());
        debug!("Keywords file: {keywords_file:?}");
        debug!(
            "Fuzzy matching: enabled={fuzzy_enabled}, threshold={fuzzy_threshold}, similarity={similarity}"
        );
        debug!("Keep-alive: enabled={keepalive_enabled}, port={port}");

        Ok(Self {
            discord_token,
            keywords_file,
            matching: MatchConfig {
                fuzzy_enabled,
                fuzzy_threshold,
                similarity,
            },
            keepalive_enabled,
            port,
        })
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_token(token: &str) -> Result<()> {
    if token.trim().len() < MIN_TOKEN_LEN {
        error!("DISCORD_TOKEN is missing or too short");
        return Err(BotError::Config(
            "DISCORD_TOKEN is invalid or missing".to_string(),
        ));
    }
    Ok(())
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(BotError::Config(format!(
            "{name} must be a boolean, got '{value}'"
        ))),
    }
}

fn parse_threshold(value: &str) -> Result<f64> {
    let threshold: f64 = value
        .parse()
        .map_err(|_| BotError::Config(format!("FUZZY_THRESHOLD is not a number: '{value}'")))?;
    if !(0.0..=1.0).contains(&threshold) {
        return Err(BotError::Config(format!(
            "FUZZY_THRESHOLD must be within [0, 1], got {threshold}"
        )));
    }
    Ok(threshold)
}

fn parse_port(value: &str) -> Result<u16> {
    value
        .parse()
        .map_err(|_| BotError::Config(format!("PORT is not a valid port: '{value}'")))
}
