use tracing::debug;

use crate::error::AppError;
use crate::henrik::HenrikClient;

use super::{Bundle, MatchRecord, PlayerHandle, RankSnapshot, RegionCode};

/// Fetch rank, lifetime history, player card and recent matches of a player.
///
/// The four lookups run concurrently and are all awaited to completion. If
/// any of them failed the whole fetch fails with that error and the other
/// results are dropped.
pub async fn fetch(
    client: &HenrikClient,
    handle: &PlayerHandle,
    region: &RegionCode,
) -> Result<Bundle, AppError> {
    debug!(%handle, %region, "fetching player data");

    let (mmr, lifetime, account, matches) = tokio::join!(
        client.get_mmr(region, handle),
        client.get_lifetime_mmr_history(region, handle),
        client.get_account(handle),
        client.get_matches(region, handle),
    );

    let (mmr, lifetime, account, matches) = (mmr?, lifetime?, account?, matches?);

    debug!(
        lifetime_entries = lifetime.entries(),
        matches = matches.data.as_ref().map_or(0, Vec::len),
        "player data fetched"
    );

    Ok(Bundle {
        rank: RankSnapshot::try_from(mmr)?,
        matches: matches
            .data
            .unwrap_or_default()
            .into_iter()
            .map(MatchRecord::from)
            .collect(),
        player_card_icon_url: account.card_icon_url(),
    })
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::stats::fixtures::{self, ACCOUNT_PATH, LIFETIME_PATH, MATCHES_PATH, MMR_PATH};

    fn player() -> (PlayerHandle, RegionCode) {
        ("Foo#NA1".parse().unwrap(), RegionCode::new("na").unwrap())
    }

    #[tokio::test]
    async fn fetch_builds_bundle_from_all_four_lookups() {
        let server = MockServer::start_async().await;
        let mocks = fixtures::mock_player(&server, None).await;
        let client = HenrikClient::new(server.base_url(), "key");
        let (handle, region) = player();

        let bundle = fetch(&client, &handle, &region).await.unwrap();

        for mock in &mocks {
            mock.assert_async().await;
        }
        assert_eq!(bundle.rank.current_tier_label, "Gold 2");
        assert_eq!(bundle.rank.current_elo, 1475);
        assert_eq!(bundle.rank.peak_tier_label, "Platinum 1");
        assert_eq!(bundle.matches.len(), 3);
        assert_eq!(
            bundle.player_card_icon_url.as_deref(),
            Some(fixtures::CARD_URL)
        );
    }

    #[tokio::test]
    async fn any_failing_lookup_fails_the_whole_fetch() {
        for failing in [ACCOUNT_PATH, MMR_PATH, LIFETIME_PATH, MATCHES_PATH] {
            let server = MockServer::start_async().await;
            let mocks = fixtures::mock_player(&server, Some((failing, 500))).await;
            let client = HenrikClient::new(server.base_url(), "key");
            let (handle, region) = player();

            let res = fetch(&client, &handle, &region).await;

            assert!(
                matches!(res, Err(AppError::UpstreamFetch { status: 500, ref path }) if path == failing),
                "failure on {failing} should abort the fetch"
            );
            // Every lookup still ran to completion.
            for mock in &mocks {
                mock.assert_async().await;
            }
        }
    }

    #[tokio::test]
    async fn upstream_failure_wins_over_missing_rank() {
        let server = MockServer::start_async().await;
        fixtures::mock_json(&server, MMR_PATH, 200, json!({ "status": 200, "data": {} })).await;
        fixtures::mock_json(&server, LIFETIME_PATH, 200, fixtures::lifetime_body()).await;
        fixtures::mock_json(&server, ACCOUNT_PATH, 200, fixtures::account_body("na")).await;
        fixtures::mock_json(&server, MATCHES_PATH, 502, json!({})).await;
        let client = HenrikClient::new(server.base_url(), "key");
        let (handle, region) = player();

        let res = fetch(&client, &handle, &region).await;

        assert!(matches!(res, Err(AppError::UpstreamFetch { status: 502, .. })));
    }

    #[tokio::test]
    async fn missing_current_rank_is_rank_unavailable() {
        let server = MockServer::start_async().await;
        fixtures::mock_json(
            &server,
            MMR_PATH,
            200,
            json!({ "status": 200, "data": { "highest_rank": { "patched_tier": "Gold 1", "tier": 12 } } }),
        )
        .await;
        fixtures::mock_json(&server, LIFETIME_PATH, 200, fixtures::lifetime_body()).await;
        fixtures::mock_json(&server, ACCOUNT_PATH, 200, fixtures::account_body("na")).await;
        fixtures::mock_json(&server, MATCHES_PATH, 200, fixtures::matches_body()).await;
        let client = HenrikClient::new(server.base_url(), "key");
        let (handle, region) = player();

        let res = fetch(&client, &handle, &region).await;

        assert!(matches!(res, Err(AppError::RankUnavailable)));
    }

    #[tokio::test]
    async fn empty_match_history_is_not_an_error() {
        let server = MockServer::start_async().await;
        fixtures::mock_json(&server, MMR_PATH, 200, fixtures::mmr_body("Iron 1", 12)).await;
        fixtures::mock_json(&server, LIFETIME_PATH, 200, json!({ "status": 200, "data": [] })).await;
        fixtures::mock_json(&server, ACCOUNT_PATH, 200, json!({ "status": 200, "data": { "region": "na" } })).await;
        fixtures::mock_json(&server, MATCHES_PATH, 200, json!({ "status": 200, "data": null })).await;
        let client = HenrikClient::new(server.base_url(), "key");
        let (handle, region) = player();

        let bundle = fetch(&client, &handle, &region).await.unwrap();

        assert!(bundle.matches.is_empty());
        assert!(bundle.player_card_icon_url.is_none());
    }
}
