//! Explorer end to end: filter changes drive HTTP fetches and state updates

mod common;

use common::*;
use eurovisor_core::application::{Explorer, FetchError, FetchOptions};
use eurovisor_core::domain::FilterState;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

fn explorer_for(server: &MockServer, options: FetchOptions) -> Arc<Explorer> {
    Arc::new(Explorer::new(Arc::new(api_for(server)), options).unwrap())
}

#[tokio::test]
async fn test_default_filter_shows_winners() {
    let server = contest_server().await;
    let explorer = explorer_for(&server, FetchOptions::default());

    let page = explorer.apply_filter(FilterState::default()).await.unwrap();
    assert_eq!(page.entries.len(), 3);

    let state = explorer.snapshot();
    assert!(state.showing_winners);
    assert!(state.initial_data_loaded);
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.results[0].country_name, "Sweden");
}

#[tokio::test]
async fn test_initial_data_loaded_once() {
    let server = contest_server().await;
    let explorer = explorer_for(&server, FetchOptions::default());

    explorer.apply_filter(FilterState::default()).await.unwrap();
    explorer
        .apply_filter(FilterState::new(Some(2022), None))
        .await
        .unwrap();
    explorer
        .apply_filter(FilterState::new(None, Some("SE".into())))
        .await
        .unwrap();

    assert_eq!(requests_to(&server, "/api/countries").await, 1);
    assert_eq!(requests_to(&server, "/api/contests").await, 1);
}

#[tokio::test]
async fn test_year_filter_sets_current_contest() {
    let server = contest_server().await;
    let explorer = explorer_for(&server, FetchOptions::default());

    explorer
        .apply_filter(FilterState::new(Some(2021), None))
        .await
        .unwrap();

    let state = explorer.snapshot();
    assert!(!state.showing_winners);
    assert_eq!(state.current_contest.as_ref().map(|c| c.year), Some(2021));
    let countries: Vec<&str> = state.results.iter().map(|e| e.country.as_str()).collect();
    assert_eq!(countries, vec!["IT", "SE", "AU"]);
}

#[tokio::test]
async fn test_error_is_published() {
    let server = contest_server().await;
    let explorer = explorer_for(&server, FetchOptions::default());

    let err = explorer
        .apply_filter(FilterState::new(Some(2023), Some("AU".into())))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::DidNotParticipate { .. }));

    let state = explorer.snapshot();
    assert_eq!(
        state.error.as_deref(),
        Some("Australia did not participate in Eurovision 2023")
    );
    assert!(state.results.is_empty());
    assert!(!state.loading);
    assert_eq!(state.current_contest.as_ref().map(|c| c.year), Some(2023));
}

#[tokio::test]
async fn test_initial_data_failure_is_retried() {
    let server = MockServer::start().await;
    mount_status(&server, "/api/countries", 503).await;
    mount_json(&server, "/api/contests", json!([])).await;
    let explorer = explorer_for(&server, FetchOptions::default());

    let err = explorer.apply_filter(FilterState::default()).await.unwrap_err();
    assert!(matches!(err, FetchError::InitialData(_)));
    assert_eq!(
        explorer.snapshot().error.as_deref(),
        Some("Failed to load initial data. Please try again later.")
    );
    assert!(!explorer.snapshot().initial_data_loaded);

    server.reset().await;
    mount_json(&server, "/api/countries", countries()).await;
    mount_json(&server, "/api/contests", json!([])).await;

    let page = explorer.apply_filter(FilterState::default()).await.unwrap();
    assert!(page.entries.is_empty());
    assert!(explorer.snapshot().initial_data_loaded);
}

#[tokio::test]
async fn test_newer_filter_supersedes_slow_fetch() {
    let server = contest_server().await;
    mount_delayed_json(
        &server,
        "/api/contests/2000",
        json!({ "year": 2000, "contestants": [] }),
        Duration::from_millis(500),
    )
    .await;
    let explorer = explorer_for(&server, FetchOptions::default());
    explorer.load_initial_data().await.unwrap();

    let slow = {
        let explorer = Arc::clone(&explorer);
        tokio::spawn(async move {
            explorer
                .apply_filter(FilterState::new(Some(2000), None))
                .await
        })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    explorer
        .apply_filter(FilterState::new(Some(2022), None))
        .await
        .unwrap();

    let slow_outcome = slow.await.unwrap();
    assert!(matches!(slow_outcome, Err(FetchError::Cancelled)));

    let state = explorer.snapshot();
    assert_eq!(state.filter, FilterState::new(Some(2022), None));
    assert_eq!(state.current_contest.as_ref().map(|c| c.year), Some(2022));
    assert_eq!(state.results.len(), 2);
}

#[tokio::test]
async fn test_videos_resolved_when_enabled() {
    let server = contest_server().await;
    mount_json(
        &server,
        "/api/contests/2022/contestants/2",
        json!({
            "id": 2,
            "country": "UA",
            "artist": "Kalush Orchestra",
            "song": "Stefania",
            "videoUrls": ["https://www.youtube.com/embed/F1fl60ypdLs"]
        }),
    )
    .await;
    let options = FetchOptions {
        resolve_videos: true,
        ..FetchOptions::default()
    };
    let explorer = explorer_for(&server, options);

    let page = explorer
        .apply_filter(FilterState::new(Some(2022), Some("UA".into())))
        .await
        .unwrap();

    assert_eq!(
        page.entries[0].video_url.as_deref(),
        Some("https://www.youtube.com/embed/F1fl60ypdLs")
    );
}

#[tokio::test]
async fn test_results_serialize_camel_case() {
    let server = contest_server().await;
    let explorer = explorer_for(&server, FetchOptions::default());

    let page = explorer
        .apply_filter(FilterState::new(Some(2023), Some("FI".into())))
        .await
        .unwrap();

    let value = serde_json::to_value(&page.entries).unwrap();
    assert_eq!(value[0]["countryName"], "Finland");
    assert_eq!(value[0]["didQualify"], true);
    assert_eq!(value[0]["isWinner"], false);
    assert_eq!(value[0]["place"], 2);
    assert!(value[0].get("videoUrl").is_none());
}
