use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use civic_assistant::{AssistantConfig, CivicAssistant};
use civic_directory::WardDirectory;
use civic_gateway::{build_gateway_router, GatewayServerState, DEFAULT_MAX_BODY_BYTES};
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn spawn_offline_gateway() -> Result<(SocketAddr, tokio::task::JoinHandle<()>)> {
    let directory = Arc::new(WardDirectory::embedded().context("load ward data")?);
    let assistant = CivicAssistant::new(directory, None, AssistantConfig::default());
    let state = Arc::new(GatewayServerState::new(assistant, DEFAULT_MAX_BODY_BYTES));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .context("bind ephemeral listener")?;
    let addr = listener.local_addr().context("resolve listener addr")?;
    let app = build_gateway_router(state);
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    tokio::time::sleep(Duration::from_millis(20)).await;
    Ok((addr, handle))
}

#[tokio::test]
async fn integration_search_then_chat_about_the_matched_ward() {
    let (addr, handle) = spawn_offline_gateway().await.expect("spawn gateway");
    let client = reqwest::Client::new();

    let search = client
        .get(format!("http://{addr}/api/search"))
        .query(&[("query", "Andersonville")])
        .send()
        .await
        .expect("search request")
        .json::<Value>()
        .await
        .expect("search payload");
    let ward_id = search["results"][0]["id"].as_i64().expect("matched ward id");
    assert_eq!(ward_id, 48);

    let chat = client
        .post(format!("http://{addr}/api/chat"))
        .json(&json!({"message": "How can I contact the office?", "districtId": ward_id}))
        .send()
        .await
        .expect("chat request");
    assert_eq!(chat.status().as_u16(), 200);
    let chat = chat.json::<Value>().await.expect("chat payload");
    assert_eq!(chat["source"], "local-fallback");
    let message = chat["message"].as_str().expect("message string");
    assert!(message.contains("Here's how to contact the Ward 48 office"));
    assert!(message.contains("info@the48thward.org"));

    handle.abort();
}

#[tokio::test]
async fn integration_ward_detail_matches_directory_display_record() {
    let (addr, handle) = spawn_offline_gateway().await.expect("spawn gateway");
    let directory = WardDirectory::embedded().expect("embedded ward data");

    for id in [1_u32, 4, 50] {
        let payload = reqwest::get(format!("http://{addr}/api/wards/{id}"))
            .await
            .expect("ward request")
            .json::<Value>()
            .await
            .expect("ward payload");
        let expected = serde_json::to_value(
            directory.to_display_record(directory.by_id(id).expect("ward present")),
        )
        .expect("encode display record");
        assert_eq!(payload, expected, "ward {id}");
    }

    handle.abort();
}
