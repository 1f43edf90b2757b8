use std::collections::HashMap;

use super::PlayerHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankSnapshot {
    pub current_tier_label: String,
    pub current_elo: i64,
    /// `"N/A"` when the player never had a peak rank.
    pub peak_tier_label: String,
    pub current_tier_icon_url: String,
    /// Empty when no peak tier id is known.
    pub peak_tier_icon_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantStats {
    pub name: String,
    pub tag: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub headshots: u32,
    pub bodyshots: u32,
    pub legshots: u32,
    /// Lower-cased.
    pub team_id: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamResult {
    pub won: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchRecord {
    pub participants: Vec<ParticipantStats>,
    /// Keyed by lower-cased team id.
    pub team_results: HashMap<String, TeamResult>,
}

impl MatchRecord {
    pub fn participant(&self, handle: &PlayerHandle) -> Option<&ParticipantStats> {
        self.participants
            .iter()
            .find(|p| handle.matches(&p.name, &p.tag))
    }

    /// `false` for a team id absent from the results.
    pub fn has_won(&self, team_id: &str) -> bool {
        self.team_results
            .get(&team_id.to_lowercase())
            .is_some_and(|team| team.won)
    }
}

/// Everything fetched for one player, before aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub rank: RankSnapshot,
    pub matches: Vec<MatchRecord>,
    pub player_card_icon_url: Option<String>,
}
