//! Mock contest API server shared by the integration tests

#![allow(dead_code)]

use eurovisor_infra_http::{HttpApiConfig, HttpContestApi};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn api_for(server: &MockServer) -> HttpContestApi {
    let config = HttpApiConfig::default().with_base_url(format!("{}/api", server.uri()));
    HttpContestApi::new(&config).unwrap()
}

fn contestant(id: u32, country: &str, artist: &str, song: &str) -> Value {
    json!({ "id": id, "country": country, "artist": artist, "song": song })
}

fn performance(contestant_id: u32, place: u32) -> Value {
    json!({ "contestantId": contestant_id, "running": contestant_id, "place": place, "scores": [] })
}

/// 2021: IT wins, SE 14th, AU out in the semi-final
pub fn contest_2021() -> Value {
    json!({
        "year": 2021,
        "city": "Rotterdam",
        "contestants": [
            contestant(1, "SE", "Tusse", "Voices"),
            contestant(2, "IT", "Måneskin", "Zitti e buoni"),
            contestant(3, "AU", "Montaigne", "Technicolour"),
        ],
        "rounds": [
            { "name": "semifinal1", "performances": [performance(1, 7), performance(3, 14)] },
            {
                "name": "final",
                "date": "2021-05-22",
                "performances": [performance(2, 1), performance(1, 14)]
            },
        ]
    })
}

/// 2022: UA wins, SE 4th
pub fn contest_2022() -> Value {
    json!({
        "year": 2022,
        "contestants": [
            contestant(1, "SE", "Cornelia Jakobs", "Hold Me Closer"),
            contestant(2, "UA", "Kalush Orchestra", "Stefania"),
        ],
        "rounds": [
            { "name": "final", "performances": [performance(2, 1), performance(1, 4)] },
        ]
    })
}

/// 2023: SE wins, FI 2nd
pub fn contest_2023() -> Value {
    json!({
        "year": 2023,
        "contestants": [
            contestant(1, "FI", "Käärijä", "Cha Cha Cha"),
            contestant(2, "SE", "Loreen", "Tattoo"),
        ],
        "rounds": [
            { "name": "final", "performances": [performance(2, 1), performance(1, 2)] },
        ]
    })
}

pub fn countries() -> Value {
    json!({
        "SE": "Sweden",
        "IT": "Italy",
        "UA": "Ukraine",
        "FI": "Finland",
        "AU": "Australia",
    })
}

pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_delayed_json(server: &MockServer, route: &str, body: Value, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(body)
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Server with countries, the contest list and the three contests above
pub async fn contest_server() -> MockServer {
    let server = MockServer::start().await;
    mount_json(&server, "/api/countries", countries()).await;
    mount_json(
        &server,
        "/api/contests",
        json!([{ "year": 2021 }, { "year": 2022 }, { "year": 2023 }]),
    )
    .await;
    mount_json(&server, "/api/contests/2021", contest_2021()).await;
    mount_json(&server, "/api/contests/2022", contest_2022()).await;
    mount_json(&server, "/api/contests/2023", contest_2023()).await;
    server
}

/// Number of requests the server received for `route`
pub async fn requests_to(server: &MockServer, route: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == route)
        .count()
}
