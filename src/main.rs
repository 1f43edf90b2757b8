use poise::serenity_prelude as serenity;
use tracing::info;

use config::Config;
use discord::Data;
use error::AppError;
use henrik::HenrikClient;

mod config;
mod discord;
mod error;
mod henrik;
mod logging;
mod stats;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;
    logging::init();

    info!(api = %config.henrik_api_url, prefix = %config.command_prefix, "🎯 Starting...");

    let data = Data {
        henrik: HenrikClient::new(&config.henrik_api_url, &config.henrik_api_key),
    };
    let framework = discord::create_framework(data, config.command_prefix.clone());

    let intents = serenity::GatewayIntents::non_privileged()
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await?;

    info!("🌐 Connecting to gateway");
    client.start().await?;

    Ok(())
}
