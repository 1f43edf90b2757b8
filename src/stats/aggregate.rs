use std::fmt;

use super::{Bundle, ParticipantStats, PlayerHandle};

/// A derived statistic, either a value rounded to a fixed number of decimals
/// or not computable because its denominator was zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Value { value: f64, decimals: usize },
    NotAvailable,
}

impl Metric {
    fn ratio(numerator: u64, denominator: u64, scale: f64, decimals: usize) -> Self {
        if denominator == 0 {
            return Self::NotAvailable;
        }

        let raw = numerator as f64 * scale / denominator as f64;
        let factor = 10_f64.powi(decimals as i32);

        Self::Value {
            value: (raw * factor).round() / factor,
            decimals,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value { value, .. } => Some(*value),
            Self::NotAvailable => None,
        }
    }

    /// Same as [`Display`](fmt::Display) with a trailing `%` when available.
    pub fn percent(&self) -> String {
        match self {
            Self::Value { .. } => format!("{self}%"),
            Self::NotAvailable => self.to_string(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value { value, decimals } => write!(f, "{:.*}", *decimals, value),
            Self::NotAvailable => f.write_str("N/A"),
        }
    }
}

/// Progress inside the current tier, `elo mod 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EloProgress(u32);

impl EloProgress {
    pub fn from_elo(elo: i64) -> Self {
        Self(elo.rem_euclid(100) as u32)
    }

    pub fn points(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EloProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}

/// Running sums over the matches where the player was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
    pub headshots: u64,
    pub bodyshots: u64,
    pub legshots: u64,
    pub wins: u64,
    pub matches: u64,
}

impl Totals {
    fn absorb(self, participant: &ParticipantStats, won: bool) -> Self {
        Self {
            kills: self.kills + u64::from(participant.kills),
            deaths: self.deaths + u64::from(participant.deaths),
            assists: self.assists + u64::from(participant.assists),
            headshots: self.headshots + u64::from(participant.headshots),
            bodyshots: self.bodyshots + u64::from(participant.bodyshots),
            legshots: self.legshots + u64::from(participant.legshots),
            wins: self.wins + u64::from(won),
            matches: self.matches + 1,
        }
    }

    pub fn shots(&self) -> u64 {
        self.headshots + self.bodyshots + self.legshots
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateStats {
    pub kd: Metric,
    pub headshot_pct: Metric,
    pub win_rate_pct: Metric,
    pub elo_progress: EloProgress,
    pub totals: Totals,
}

impl AggregateStats {
    pub fn from_totals(totals: Totals, current_elo: i64) -> Self {
        Self {
            kd: Metric::ratio(totals.kills, totals.deaths, 1.0, 2),
            headshot_pct: Metric::ratio(totals.headshots, totals.shots(), 100.0, 1),
            win_rate_pct: Metric::ratio(totals.wins, totals.matches, 100.0, 1),
            elo_progress: EloProgress::from_elo(current_elo),
            totals,
        }
    }

    /// Number of matches the player was found in.
    pub fn match_count(&self) -> u64 {
        self.totals.matches
    }
}

/// Fold the recent matches of `bundle` into the player's derived statistics.
///
/// Matches without a participant matching `handle` are skipped entirely.
pub fn aggregate(handle: &PlayerHandle, bundle: &Bundle) -> AggregateStats {
    let totals = bundle
        .matches
        .iter()
        .filter_map(|record| {
            record
                .participant(handle)
                .map(|participant| (participant, record.has_won(&participant.team_id)))
        })
        .fold(Totals::default(), |totals, (participant, won)| {
            totals.absorb(participant, won)
        });

    AggregateStats::from_totals(totals, bundle.rank.current_elo)
}
