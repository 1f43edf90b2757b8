//! Player statistics pipeline: resolve the Riot ID, fetch everything in one
//! fan-out, then fold the recent matches into derived statistics.

use tracing::{info, instrument};

use crate::error::AppError;
use crate::henrik::HenrikClient;

mod aggregate;
mod fetcher;
#[cfg(test)]
mod fixtures;
mod handle;
mod model;
mod resolver;

pub use aggregate::{AggregateStats, EloProgress, Metric, Totals, aggregate};
pub use fetcher::fetch;
pub use handle::{PlayerHandle, RegionCode};
pub use model::{Bundle, MatchRecord, ParticipantStats, RankSnapshot, TeamResult};
pub use resolver::{ResolvedPlayer, resolve};

/// Everything the presentation layer needs to answer a rank request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerReport {
    /// The Riot ID as typed by the user.
    pub display_name: String,
    pub region: RegionCode,
    pub rank: RankSnapshot,
    pub player_card_icon_url: Option<String>,
    pub stats: AggregateStats,
}

#[instrument(skip(client))]
pub async fn lookup(client: &HenrikClient, riot_id: &str) -> Result<PlayerReport, AppError> {
    let ResolvedPlayer { handle, region } = resolve(client, riot_id).await?;
    let bundle = fetch(client, &handle, &region).await?;
    let stats = aggregate(&handle, &bundle);

    info!(
        %region,
        tier = %bundle.rank.current_tier_label,
        matches = stats.match_count(),
        "player stats aggregated"
    );

    Ok(PlayerReport {
        display_name: riot_id.trim().to_string(),
        region,
        rank: bundle.rank,
        player_card_icon_url: bundle.player_card_icon_url,
        stats,
    })
}
