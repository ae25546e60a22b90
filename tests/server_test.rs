//! End-to-end test over a real TCP listener, as GitHub would call it.

#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};

use webhook_recorder::api;
use webhook_recorder::app_state::AppState;
use webhook_recorder::persistence::{MemoryRecordStore, RecordStore};

async fn spawn_server() -> String {
    let store: Arc<dyn RecordStore> = Arc::new(MemoryRecordStore::new());
    let app = api::build_app(AppState::new(store), Duration::from_secs(5), 1024 * 1024);

    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("failed to bind");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("no local address");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn github_deliveries_show_up_in_feed() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let deliveries = [
        (
            "push",
            json!({
                "ref": "refs/heads/main",
                "pusher": { "name": "alice" },
                "commits": [{ "timestamp": "2024-01-01T00:00:00Z" }]
            }),
        ),
        (
            "pull_request",
            json!({
                "action": "closed",
                "pull_request": {
                    "merged": true,
                    "user": { "login": "bob" },
                    "head": { "ref": "feature" },
                    "base": { "ref": "main" },
                    "created_at": "T1",
                    "merged_at": "T2"
                }
            }),
        ),
    ];

    for (event, payload) in &deliveries {
        let Ok(response) = client
            .post(format!("{base}/webhook/receiver"))
            .header("x-github-event", *event)
            .json(payload)
            .send()
            .await
        else {
            panic!("request failed");
        };
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let Ok(text) = response.text().await else {
            panic!("no body");
        };
        assert_eq!(text, "inserted to collection");
    }

    let Ok(response) = client.get(format!("{base}/webhook/records")).send().await else {
        panic!("request failed");
    };
    let Ok(listing) = response.json::<Value>().await else {
        panic!("listing is not JSON");
    };
    let lines: Vec<&str> = listing["data"]
        .as_array()
        .map(|rows| rows.iter().filter_map(|r| r["formatted_doc"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(
        lines,
        [
            r#""alice" pushed to "main" on 2024-01-01T00:00:00Z"#,
            r#""bob" merged branch "feature" to "main" on T2"#,
        ]
    );
}
