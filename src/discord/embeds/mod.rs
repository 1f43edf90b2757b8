use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::stats::PlayerReport;

/// Valorant red.
const EMBED_COLOUR: u32 = 0xFF4655;

const BLANK: &str = "\u{200B}";

/// Ordered `(name, value, inline)` fields of the profile embed.
fn report_fields(report: &PlayerReport) -> Vec<(&'static str, String, bool)> {
    let stats = &report.stats;

    vec![
        ("🏆 Current Rank", report.rank.current_tier_label.clone(), true),
        ("⭐ Peak Rank", report.rank.peak_tier_label.clone(), true),
        ("📊 Rank Progress", stats.elo_progress.to_string(), true),
        (BLANK, BLANK.to_string(), false),
        ("🔥 K/D (Recent)", stats.kd.to_string(), true),
        ("🎯 Headshot % (Recent)", stats.headshot_pct.percent(), true),
        ("📈 Win Rate (Recent)", stats.win_rate_pct.percent(), true),
    ]
}

/// Player card if known, current rank icon otherwise.
fn thumbnail_url(report: &PlayerReport) -> Option<&str> {
    report
        .player_card_icon_url
        .as_deref()
        .or(Some(report.rank.current_tier_icon_url.as_str()))
        .filter(|url| !url.is_empty())
}

pub fn player_report(report: &PlayerReport) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(format!("{}'s Valorant Profile", report.display_name))
        .color(EMBED_COLOUR)
        .fields(report_fields(report))
        .footer(CreateEmbedFooter::new(format!(
            "Region: {}",
            report.region.display_name()
        )))
        .timestamp(Timestamp::now());

    if let Some(url) = thumbnail_url(report) {
        embed = embed.thumbnail(url);
    }

    if !report.rank.current_tier_icon_url.is_empty() {
        embed = embed.image(&report.rank.current_tier_icon_url);
    }

    embed
}
