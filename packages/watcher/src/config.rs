use anyhow::{Context, Result};
use std::env;

/// Process configuration loaded from environment variables.
///
/// Built once in `main` and handed to the stages that need it; the pipeline
/// itself never reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Messaging bot credential.
    pub bot_token: String,
    /// Delivery target chat identifier.
    pub group_chat_id: String,
    /// Optional Hub access token for authenticated listing calls.
    pub hub_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            bot_token: get("BOT_TOKEN").context("BOT_TOKEN must be set")?,
            group_chat_id: get("GROUP_CHAT_ID").context("GROUP_CHAT_ID must be set")?,
            hub_token: get("HF_TOKEN"),
        })
    }
}
