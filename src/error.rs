use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid format. Use 'username#tag'")]
    InvalidFormat,

    #[error("Player not found: {name}#{tag}")]
    PlayerNotFound { name: String, tag: String },

    #[error("Region not found in account data. Check if the player exists.")]
    RegionNotFound,

    #[error("Error fetching player data (HTTP {status} on {path})")]
    UpstreamFetch { status: u16, path: String },

    #[error("Could not retrieve current rank data for this player.")]
    RankUnavailable,

    #[error("An error occurred while communicating with the Valorant API.")]
    Transport(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Discord error: {0}")]
    Discord(Box<serenity::Error>),
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::Discord(Box::new(err))
    }
}

impl AppError {
    /// Failures caused by the requested player or the stats provider, as
    /// opposed to the bot itself.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            AppError::InvalidFormat
                | AppError::PlayerNotFound { .. }
                | AppError::RegionNotFound
                | AppError::UpstreamFetch { .. }
                | AppError::RankUnavailable
        )
    }
}
