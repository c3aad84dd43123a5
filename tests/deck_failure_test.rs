use httpmock::prelude::*;
use remote_blackjack::app::{self, ConsoleOptions};
use remote_blackjack::{DeckApiClient, GameState, Phase, Settings, Table};
use std::time::Duration;

fn table_for(server: &MockServer) -> Table<DeckApiClient> {
    let settings = Settings {
        api_base_url: server.url("/api"),
        ..Settings::default()
    };
    let deck = DeckApiClient::new(settings.api_base_url.clone(), Duration::from_secs(5)).unwrap();
    Table::new(deck, &settings)
}

#[tokio::test]
async fn test_shuffle_failure_reports_step_and_skips_deal() {
    let server = MockServer::start();
    let shuffle_mock = server.mock(|when, then| {
        when.method(GET).path("/api/deck/new/shuffle/");
        then.status(503);
    });
    let draw_mock = server.mock(|when, then| {
        when.method(GET).path_contains("/draw/");
        then.status(200);
    });

    let table = table_for(&server);
    let transition = table.start(&GameState::new()).await;

    shuffle_mock.assert();
    draw_mock.assert_hits(0);

    let alert = transition.alert.unwrap();
    assert!(alert.starts_with("unable to shuffle deck"));
    assert!(alert.contains("503"));
    assert_eq!(transition.state.phase(), Phase::InProgress);
    assert!(transition.state.deck().is_none());
}

#[tokio::test]
async fn test_deal_failure_leaves_game_mid_deal() -> anyhow::Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/deck/new/shuffle/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "success": true,
                "deck_id": "abc123",
                "shuffled": true,
                "remaining": 52
            }));
    });
    let draw_mock = server.mock(|when, then| {
        when.method(GET).path("/api/deck/abc123/draw/");
        then.status(500);
    });

    let table = table_for(&server);
    let mut out = Vec::new();

    let report = app::run(
        &table,
        GameState::new(),
        "start\nhit\n".as_bytes(),
        &mut out,
        ConsoleOptions::default(),
    )
    .await?;

    draw_mock.assert_hits(2);

    let text = String::from_utf8(out)?;
    assert!(text.contains("⚠️  unable to deal the house hand"));
    assert!(text.contains("⚠️  unable to draw cards"));

    let state = report.final_state;
    assert_eq!(state.phase(), Phase::InProgress);
    assert_eq!(state.deck().map(|d| d.as_str()), Some("abc123"));
    assert!(state.house().is_empty());
    assert!(state.player().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_unreachable_service_is_an_alert_not_a_crash() {
    let settings = Settings {
        api_base_url: "http://127.0.0.1:1/api".to_string(),
        ..Settings::default()
    };
    let deck = DeckApiClient::new(settings.api_base_url.clone(), Duration::from_secs(2)).unwrap();
    let table = Table::new(deck, &settings);

    let transition = table.start(&GameState::new()).await;
    assert!(transition.alert.unwrap().starts_with("unable to shuffle deck"));
}

#[tokio::test]
async fn test_slow_shuffle_times_out_into_an_alert() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/deck/new/shuffle/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"success": true, "deck_id": "late"}))
            .delay(Duration::from_secs(3));
    });
    let draw_mock = server.mock(|when, then| {
        when.method(GET).path_contains("/draw/");
        then.status(200);
    });

    let settings = Settings {
        api_base_url: server.url("/api"),
        timeout_seconds: 1,
        ..Settings::default()
    };
    let deck = DeckApiClient::new(settings.api_base_url.clone(), settings.request_timeout()).unwrap();
    let table = Table::new(deck, &settings);

    let transition = table.start(&GameState::new()).await;

    draw_mock.assert_hits(0);
    assert!(transition.alert.unwrap().starts_with("unable to shuffle deck"));
    assert_eq!(transition.state.phase(), Phase::InProgress);
    assert!(transition.state.deck().is_none());
    assert!(transition.state.house().is_empty());
    assert!(transition.state.player().is_empty());
}
