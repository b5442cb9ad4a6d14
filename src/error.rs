use std::path::PathBuf;

use thiserror::Error;

/// Reply sent to the user when something fails on our side.
const INTERNAL_ERROR_MESSAGE: &str = "⚠️ Ocorreu um erro interno. Tente novamente mais tarde.";

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Serenity error: {0}")]
    Serenity(Box<poise::serenity_prelude::Error>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Keyword store is empty")]
    EmptyKeywordStore,

    #[error("Keyword at position {0} is empty")]
    EmptyKeyword(usize),

    #[error("Keyword '{0}' has an empty response")]
    EmptyResponse(String),

    #[error("Duplicate keyword '{0}' (keywords are case-insensitive)")]
    DuplicateKeyword(String),

    #[error("Failed to read keyword file {path}: {source}")]
    KeywordFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid keyword file format: {0}")]
    KeywordFormat(#[from] serde_json::Error),

    #[error("Keyword pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<poise::serenity_prelude::Error> for BotError {
    fn from(err: poise::serenity_prelude::Error) -> Self {
        BotError::Serenity(Box::new(err))
    }
}

impl BotError {
    /// Returns a user-friendly error message suitable for displaying in chat
    pub fn user_message(&self) -> String {
        match self {
            BotError::Serenity(_) => {
                "⚠️ Estou com dificuldades para falar com o Discord agora. Tente novamente mais tarde.".to_string()
            }
            BotError::Config(_)
            | BotError::EnvVar(_)
            | BotError::EmptyKeywordStore
            | BotError::EmptyKeyword(_)
            | BotError::EmptyResponse(_)
            | BotError::DuplicateKeyword(_)
            | BotError::KeywordFile { .. }
            | BotError::KeywordFormat(_)
            | BotError::Pattern(_)
            | BotError::Io(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
