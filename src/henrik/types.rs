//! Response shapes of the HenrikDev endpoints used by the bot.
//!
//! Every field the API may omit or send as `null` is an `Option`; the
//! conversions into the domain types below decide the defaults.

use std::collections::HashMap;

use serde::{Deserialize, de::IgnoredAny};

use crate::error::AppError;
use crate::stats::{MatchRecord, ParticipantStats, RankSnapshot, RegionCode, TeamResult};

/// Base url of the competitive tier icons, indexed by tier id.
const TIER_ICON_ROUTE: &str =
    "https://media.valorant-api.com/competitivetiers/03621f52-342b-cf4e-4f86-9350a49c6d04";

/// Common `{ "data": ... }` envelope of every HenrikDev response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
}

// ============================================================================
// Account-v1
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AccountDto {
    pub region: Option<String>,
    pub card: Option<CardDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardDto {
    pub small: Option<String>,
}

impl ApiResponse<AccountDto> {
    pub fn region(&self) -> Option<RegionCode> {
        self.data
            .as_ref()
            .and_then(|account| account.region.as_deref())
            .and_then(RegionCode::new)
    }

    pub fn card_icon_url(&self) -> Option<String> {
        self.data
            .as_ref()
            .and_then(|account| account.card.as_ref())
            .and_then(|card| card.small.clone())
            .filter(|url| !url.is_empty())
    }
}

// ============================================================================
// MMR-v2
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct MmrDto {
    pub current_data: Option<CurrentDataDto>,
    pub highest_rank: Option<HighestRankDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentDataDto {
    pub currenttierpatched: Option<String>,
    pub elo: Option<i64>,
    pub images: Option<TierImagesDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TierImagesDto {
    pub small: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HighestRankDto {
    pub patched_tier: Option<String>,
    pub tier: Option<u32>,
}

impl TryFrom<ApiResponse<MmrDto>> for RankSnapshot {
    type Error = AppError;

    fn try_from(value: ApiResponse<MmrDto>) -> Result<Self, Self::Error> {
        let mmr = value.data.ok_or(AppError::RankUnavailable)?;
        let current = mmr.current_data.ok_or(AppError::RankUnavailable)?;
        let current_tier_label = current
            .currenttierpatched
            .filter(|label| !label.is_empty())
            .ok_or(AppError::RankUnavailable)?;

        let highest = mmr.highest_rank;
        let peak_tier_label = highest
            .as_ref()
            .and_then(|h| h.patched_tier.clone())
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| "N/A".to_string());
        let peak_tier_icon_url = highest
            .and_then(|h| h.tier)
            .filter(|tier| *tier != 0)
            .map(|tier| format!("{TIER_ICON_ROUTE}/{tier}/smallicon.png"))
            .unwrap_or_default();

        Ok(Self {
            current_tier_label,
            current_elo: current.elo.unwrap_or(0),
            peak_tier_label,
            current_tier_icon_url: current.images.and_then(|i| i.small).unwrap_or_default(),
            peak_tier_icon_url,
        })
    }
}

// ============================================================================
// Lifetime MMR history-v1
// ============================================================================

/// Only checked for well-formedness, entries are not interpreted.
#[derive(Debug, Clone, Deserialize)]
pub struct LifetimeMmrHistoryDto {
    pub data: Option<Vec<IgnoredAny>>,
}

impl LifetimeMmrHistoryDto {
    pub fn entries(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }
}

// ============================================================================
// Matches-v3
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct MatchDto {
    pub players: Option<MatchPlayersDto>,
    pub teams: Option<HashMap<String, Option<TeamDto>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchPlayersDto {
    pub all_players: Option<Vec<MatchPlayerDto>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchPlayerDto {
    pub name: Option<String>,
    pub tag: Option<String>,
    pub team: Option<String>,
    pub stats: Option<PlayerStatsDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerStatsDto {
    pub kills: Option<u32>,
    pub deaths: Option<u32>,
    pub assists: Option<u32>,
    pub headshots: Option<u32>,
    pub bodyshots: Option<u32>,
    pub legshots: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamDto {
    pub has_won: Option<bool>,
}

impl From<MatchDto> for MatchRecord {
    fn from(value: MatchDto) -> Self {
        let participants = value
            .players
            .and_then(|players| players.all_players)
            .unwrap_or_default()
            .into_iter()
            .map(ParticipantStats::from)
            .collect();

        let team_results = value
            .teams
            .unwrap_or_default()
            .into_iter()
            .map(|(team_id, team)| {
                let won = team.and_then(|t| t.has_won).unwrap_or(false);
                (team_id.to_lowercase(), TeamResult { won })
            })
            .collect();

        Self {
            participants,
            team_results,
        }
    }
}

impl From<MatchPlayerDto> for ParticipantStats {
    fn from(value: MatchPlayerDto) -> Self {
        let stats = value.stats.unwrap_or_default();

        Self {
            name: value.name.unwrap_or_default(),
            tag: value.tag.unwrap_or_default(),
            kills: stats.kills.unwrap_or(0),
            deaths: stats.deaths.unwrap_or(0),
            assists: stats.assists.unwrap_or(0),
            headshots: stats.headshots.unwrap_or(0),
            bodyshots: stats.bodyshots.unwrap_or(0),
            legshots: stats.legshots.unwrap_or(0),
            team_id: value.team.unwrap_or_default().to_lowercase(),
        }
    }
}
