use chrono::{Duration, Utc};
use reqwest::{Client, Response};
use serde_json::{json, Value};
use uuid::Uuid;

pub async fn create_club(client: &Client, app_address: &str, name: &str) -> Uuid {
    let response = client
        .post(&format!("{}/admin/clubs", app_address))
        .json(&json!({
            "name": name,
            "logo_url": format!("https://cdn.example.org/logos/{}.png", name.to_lowercase().replace(' ', "-"))
        }))
        .send()
        .await
        .expect("Failed to create club.");

    assert_eq!(response.status(), 201, "Club creation should succeed");
    let body: Value = response.json().await.expect("Failed to parse club response");
    body["data"]["id"].as_str().expect("No club id").parse().expect("Invalid club id")
}

pub async fn create_match(client: &Client, app_address: &str, home: Uuid, away: Uuid) -> Uuid {
    let response = client
        .post(&format!("{}/admin/matches", app_address))
        .json(&json!({
            "home_team_id": home,
            "away_team_id": away,
            "match_date": Utc::now() + Duration::days(2),
            "venue": "Sporthalle Nord",
            "league": "Regionalliga"
        }))
        .send()
        .await
        .expect("Failed to create match.");

    assert_eq!(response.status(), 201, "Match creation should succeed");
    let body: Value = response.json().await.expect("Failed to parse match response");
    body["data"]["id"].as_str().expect("No match id").parse().expect("Invalid match id")
}

pub async fn set_status(client: &Client, app_address: &str, match_id: Uuid, status: &str) -> Response {
    client
        .patch(&format!("{}/admin/matches/{}/status", app_address, match_id))
        .json(&json!({ "status": status }))
        .send()
        .await
        .expect("Failed to update match status.")
}

pub async fn record_set(client: &Client, app_address: &str, match_id: Uuid, home: i32, away: i32) -> Response {
    client
        .post(&format!("{}/admin/matches/{}/sets", app_address, match_id))
        .json(&json!({ "home_points": home, "away_points": away }))
        .send()
        .await
        .expect("Failed to record set.")
}

pub async fn get_match(client: &Client, app_address: &str, match_id: Uuid) -> Value {
    let response = client
        .get(&format!("{}/matches/{}", app_address, match_id))
        .send()
        .await
        .expect("Failed to get match.");
    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse match")
}

/// Two clubs and a scheduled match between them
pub async fn setup_match(client: &Client, app_address: &str) -> (Uuid, Uuid, Uuid) {
    let home = create_club(client, app_address, "VC Nordstadt").await;
    let away = create_club(client, app_address, "SC Hafen").await;
    let match_id = create_match(client, app_address, home, away).await;
    (home, away, match_id)
}
