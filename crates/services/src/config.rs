use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_AI_MODEL: &str = "gemini-2.5-flash";

/// Connection settings for the quiz generator's chat-completions endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl QuizConfig {
    /// Read `GEMINI_API_KEY`, `STUDY_AI_BASE_URL` and `STUDY_AI_MODEL`.
    ///
    /// Returns `None` when no usable key is set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_key = lookup("GEMINI_API_KEY")?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = lookup("STUDY_AI_BASE_URL").unwrap_or_else(|| DEFAULT_AI_BASE_URL.into());
        let model = lookup("STUDY_AI_MODEL").unwrap_or_else(|| DEFAULT_AI_MODEL.into());
        Some(Self {
            base_url,
            api_key: api_key.trim().to_owned(),
            model,
        })
    }
}

/// Top-level settings for the study app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub quiz: Option<QuizConfig>,
}

impl AppConfig {
    /// Read `STUDY_DATA_DIR` plus the quiz settings.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup("STUDY_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        Self {
            data_dir,
            quiz: QuizConfig::from_lookup(lookup),
        }
    }
}
