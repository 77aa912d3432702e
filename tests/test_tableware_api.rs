//! HTTP contract of `/api/tableware`: status codes and bodies for every route, driven with a
//! raw `reqwest` client against the router served in-process.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tableware_rest::transport::http::handlers::tableware::delete_handler;
use tableware_rest::{transport, Tableware, TablewareService};

/// In-memory sink for formatted `tracing` output.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Routes this thread's events into the buffer until the guard drops.
    fn install(&self) -> tracing::subscriber::DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

async fn spawn_server(service: TablewareService) -> anyhow::Result<String> {
    let router = transport::http::create_router(transport::http::AppState::new(service));

    // Bind to an ephemeral port to avoid conflicts with a running API server.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok(format!("http://127.0.0.1:{}/api/tableware", port))
}

#[tokio::test]
async fn test_list_empty_collection() -> anyhow::Result<()> {
    let base = spawn_server(TablewareService::in_memory()).await?;
    let resp = reqwest::get(&base).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await?;
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_get_missing_is_404_with_empty_body() -> anyhow::Result<()> {
    let base = spawn_server(TablewareService::in_memory()).await?;
    let resp = reqwest::get(format!("{}/999", base)).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.text().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_create_then_get() -> anyhow::Result<()> {
    let base = spawn_server(TablewareService::in_memory()).await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(&base)
        .json(&json!({
            "name": "Mandarin",
            "material": "Glass",
            "type": "Cup",
            "price": 100,
            "volume": 800
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Tableware = resp.json().await?;
    assert_eq!(created.id, 1);

    let resp = client.get(format!("{}/{}", base, created.id)).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = resp.json().await?;
    assert_eq!(
        fetched,
        json!({
            "id": 1,
            "name": "Mandarin",
            "material": "Glass",
            "type": "Cup",
            "price": 100.0,
            "volume": 800
        })
    );

    let all: Vec<Tableware> = client.get(&base).send().await?.json().await?;
    assert_eq!(all, vec![created]);
    Ok(())
}

#[tokio::test]
async fn test_update_existing_and_missing() -> anyhow::Result<()> {
    let service =
        TablewareService::with_records(vec![Tableware::new("Mandarin", "Glass", "Cup", 100.0, 800).with_id(1)])?;
    let base = spawn_server(service).await?;
    let client = reqwest::Client::new();

    let replacement = json!({
        "id": 1, "name": "c", "material": "c", "type": "c", "price": 2000, "volume": 300
    });
    let resp = client.put(format!("{}/1", base)).json(&replacement).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched: Tableware = client.get(format!("{}/1", base)).send().await?.json().await?;
    assert_eq!(fetched, Tableware::new("c", "c", "c", 2000.0, 300).with_id(1));

    let resp = client.put(format!("{}/5", base)).json(&replacement).send().await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = client.get(format!("{}/5", base)).send().await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_delete_existing_and_missing() -> anyhow::Result<()> {
    let service = TablewareService::with_records(vec![
        Tableware::new("Mandarin", "Glass", "Cup", 100.0, 800).with_id(1),
        Tableware::new("Dinner plate", "Porcelain", "Plate", 12.5, 0).with_id(2),
    ])?;
    let base = spawn_server(service).await?;
    let client = reqwest::Client::new();

    let resp = client.delete(format!("{}/11", base)).send().await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let all: Vec<Tableware> = client.get(&base).send().await?.json().await?;
    assert_eq!(all.len(), 2);

    let resp = client.delete(format!("{}/1", base)).send().await?;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(resp.text().await?.is_empty());

    let resp = client.get(format!("{}/1", base)).send().await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_delete_miss_logs_error() -> anyhow::Result<()> {
    let state = transport::http::AppState::new(TablewareService::with_records(vec![
        Tableware::new("Mandarin", "Glass", "Cup", 100.0, 800).with_id(1),
    ])?);

    let missing = CapturedLogs::default();
    {
        let _guard = missing.install();
        let resp = delete_handler(State(state.clone()), Path(11)).await.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
    let logs = missing.contents();
    assert!(logs.contains("ERROR"), "no error event in: {}", logs);
    assert!(logs.contains("attempted to delete non-existing tableware"));
    assert!(logs.contains("id=11"));

    let found = CapturedLogs::default();
    {
        let _guard = found.install();
        let resp = delete_handler(State(state.clone()), Path(1)).await.into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
    let logs = found.contents();
    assert!(logs.contains("attempting to delete tableware"));
    assert!(!logs.contains("ERROR"), "unexpected error event in: {}", logs);
    Ok(())
}

#[tokio::test]
async fn test_create_when_ids_run_out_is_500() -> anyhow::Result<()> {
    let service =
        TablewareService::with_records(vec![Tableware::new("Mandarin", "Glass", "Cup", 100.0, 800).with_id(i32::MAX - 1)])?;
    let base = spawn_server(service).await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(&base)
        .json(&json!({ "name": "c", "material": "c", "type": "c", "price": 1, "volume": 1 }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await?;
    assert_eq!(body["success"], json!(false));

    let all: Vec<Tableware> = client.get(&base).send().await?.json().await?;
    assert_eq!(all.iter().map(|t| t.id).collect::<Vec<_>>(), vec![i32::MAX - 1]);
    Ok(())
}

#[tokio::test]
async fn test_search_routes() -> anyhow::Result<()> {
    let service = TablewareService::with_records(vec![
        Tableware::new("Mandarin", "Glass", "Cup", 100.0, 800).with_id(1),
        Tableware::new("Dinner plate", "Porcelain", "Plate", 12.5, 0).with_id(2),
        Tableware::new("Espresso", "Ceramic", "Cup", 7.0, 90).with_id(3),
    ])?;
    let base = spawn_server(service).await?;
    let client = reqwest::Client::new();
    let search = format!("{}/search", base);

    let cups: Vec<Tableware> = client
        .get(&search)
        .query(&[("type", "Cup")])
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(cups.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);

    let resp = client.get(&search).query(&[("type", "Bowl")]).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.json::<Value>().await?, json!([]));

    let resp = client
        .post(&search)
        .query(&[("name", "Mandarin"), ("material", "Glass")])
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.json::<bool>().await?);

    let exists: bool = client
        .post(&search)
        .query(&[("name", "Mandarin"), ("material", "Porcelain")])
        .send()
        .await?
        .json()
        .await?;
    assert!(!exists);

    let resp = client.post(&search).query(&[("name", "Mandarin")]).send().await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_malformed_payload_is_422() -> anyhow::Result<()> {
    let base = spawn_server(TablewareService::in_memory()).await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(&base)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{\"name\": \"Mandarin\", \"price\": \"cheap\"")
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = resp.json().await?;
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap_or_default().starts_with("Invalid JSON body"));

    let all: Vec<Tableware> = client.get(&base).send().await?.json().await?;
    assert!(all.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_health_reports_record_count() -> anyhow::Result<()> {
    let service =
        TablewareService::with_records(vec![Tableware::new("Mandarin", "Glass", "Cup", 100.0, 800).with_id(1)])?;
    let base = spawn_server(service).await?;
    let health = base.replace("/api/tableware", "/health");

    let body: Value = reqwest::get(health).await?.json().await?;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["records"], json!(1));
    Ok(())
}
