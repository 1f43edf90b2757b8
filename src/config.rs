use std::env;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub henrik_api_key: String,
    pub henrik_api_url: String,
    pub command_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        const DEFAULT_HENRIK_API_URL: &str = "https://api.henrikdev.xyz";
        const DEFAULT_COMMAND_PREFIX: &str = "!";

        let discord_token = env::var("DISCORD_TOKEN")
            .map_err(|_| AppError::Config("DISCORD_TOKEN must be set".into()))?;

        let henrik_api_key = env::var("HENRIK_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::Config("HENRIK_API_KEY must be set".into()))?;

        let henrik_api_url = env::var("HENRIK_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_HENRIK_API_URL.into());

        let command_prefix = env::var("COMMAND_PREFIX")
            .ok()
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.into());

        Ok(Self {
            discord_token,
            henrik_api_key,
            henrik_api_url,
            command_prefix,
        })
    }
}
