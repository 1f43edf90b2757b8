//! Canned HenrikDev payloads shared by the HTTP-level tests.

use httpmock::{Mock, prelude::*};
use serde_json::{Value, json};

pub const CARD_URL: &str = "https://media.valorant-api.com/playercards/card/smallart.png";
pub const GOLD_2_ICON: &str = "https://media.valorant-api.com/competitivetiers/x/13/smallicon.png";

pub async fn mock_json<'a>(
    server: &'a MockServer,
    path: &str,
    status: u16,
    body: Value,
) -> Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(GET).path(path);
            then.status(status).json_body(body.clone());
        })
        .await
}

pub fn account_body(region: &str) -> Value {
    json!({
        "status": 200,
        "data": {
            "puuid": "0b1f4b1c-7b1e-4f1e-9c1e-1f1e1f1e1f1e",
            "region": region,
            "account_level": 142,
            "name": "Foo",
            "tag": "NA1",
            "card": { "small": CARD_URL, "id": "9fb348bc-41a0-91ad-8a3e-818035c4e561" }
        }
    })
}

pub fn mmr_body(tier: &str, elo: i64) -> Value {
    json!({
        "status": 200,
        "data": {
            "name": "Foo",
            "tag": "NA1",
            "current_data": {
                "currenttier": 13,
                "currenttierpatched": tier,
                "images": { "small": GOLD_2_ICON, "large": "https://example.invalid/large.png" },
                "ranking_in_tier": 75,
                "elo": elo
            },
            "highest_rank": { "patched_tier": "Platinum 1", "tier": 15, "season": "e8a1" }
        }
    })
}

pub fn lifetime_body() -> Value {
    json!({
        "status": 200,
        "results": { "total": 2, "returned": 2 },
        "data": [
            { "match_id": "a", "tier": { "id": 13, "name": "Gold 2" }, "elo": 1475 },
            { "match_id": "b", "tier": { "id": 13, "name": "Gold 2" }, "elo": 1450 }
        ]
    })
}

fn player(name: &str, tag: &str, team: &str, kills: u32, deaths: u32) -> Value {
    json!({
        "name": name,
        "tag": tag,
        "team": team,
        "stats": {
            "score": 4000,
            "kills": kills,
            "deaths": deaths,
            "assists": 3,
            "headshots": 6,
            "bodyshots": 12,
            "legshots": 2
        }
    })
}

/// Three matches, the requested player is in two of them (one won, one lost,
/// 20 kills / 10 deaths combined).
pub fn matches_body() -> Value {
    json!({
        "status": 200,
        "data": [
            {
                "players": { "all_players": [
                    player("Foo", "NA1", "Red", 12, 4),
                    player("Bar", "EUW", "Blue", 9, 13)
                ] },
                "teams": { "red": { "has_won": true }, "blue": { "has_won": false } }
            },
            {
                "players": { "all_players": [
                    player("Bar", "EUW", "Red", 20, 5),
                    player("foo", "na1", "Blue", 8, 6)
                ] },
                "teams": { "red": { "has_won": true }, "blue": { "has_won": false } }
            },
            {
                "players": { "all_players": [ player("Stranger", "0001", "Red", 30, 1) ] },
                "teams": { "red": { "has_won": true }, "blue": { "has_won": false } }
            }
        ]
    })
}

pub const ACCOUNT_PATH: &str = "/valorant/v1/account/foo/na1";
pub const MMR_PATH: &str = "/valorant/v2/mmr/na/foo/na1";
pub const LIFETIME_PATH: &str = "/valorant/v1/lifetime/mmr-history/na/foo/na1";
pub const MATCHES_PATH: &str = "/valorant/v3/matches/na/foo/na1";

/// Mock the four endpoints for `foo#na1` in region `na`, replacing the
/// response of `failing` (if any) with `status`.
pub async fn mock_player<'a>(
    server: &'a MockServer,
    failing: Option<(&str, u16)>,
) -> Vec<Mock<'a>> {
    let routes = [
        (ACCOUNT_PATH, account_body("na")),
        (MMR_PATH, mmr_body("Gold 2", 1475)),
        (LIFETIME_PATH, lifetime_body()),
        (MATCHES_PATH, matches_body()),
    ];

    let mut mocks = Vec::with_capacity(routes.len());
    for (path, body) in routes {
        let mock = match failing {
            Some((failing_path, status)) if failing_path == path => {
                mock_json(server, path, status, json!({ "status": status })).await
            }
            _ => mock_json(server, path, 200, body).await,
        };
        mocks.push(mock);
    }
    mocks
}
