use tracing::{info, instrument};

use crate::discord::bot::Context;
use crate::discord::embeds;
use crate::error::AppError;
use crate::stats;

/// Retrieves the current Valorant rank and stats for a player.
#[poise::command(slash_command, prefix_command)]
#[instrument(
    skip(ctx),
    fields(
        user_id = %ctx.author().id,
        riot_id = %username_tag
    )
)]
pub async fn rank(
    ctx: Context<'_>,
    #[description = "The Valorant username and tagline (e.g., playername#tag)"]
    #[rest]
    username_tag: String,
) -> Result<(), AppError> {
    // Defer response since the lookups might take a moment
    ctx.defer().await?;

    let report = stats::lookup(&ctx.data().henrik, &username_tag).await?;

    ctx.send(poise::CreateReply::default().embed(embeds::player_report(&report)))
        .await?;

    info!(
        tier = %report.rank.current_tier_label,
        matches = report.stats.match_count(),
        "Rank sent"
    );

    Ok(())
}
