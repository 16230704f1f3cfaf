//! REST key-value backend tests against a local mock service

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use parking_lot::Mutex;
use serde_json::{json, Value};

use kv_memory_graph::store::DEFAULT_GRAPH_KEY;
use kv_memory_graph::{
    Entity, GraphError, GraphStore, KnowledgeGraphManager, RestKvStore, StoreError,
};

const TOKEN: &str = "secret";

type Values = Arc<Mutex<HashMap<String, String>>>;

fn authorized(headers: &HeaderMap) -> bool {
    headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) == Some("Bearer secret")
}

async fn get_value(
    State(values): State<Values>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "WRONGPASS"})));
    }
    let value = values.lock().get(&key).cloned();
    (StatusCode::OK, Json(json!({ "result": value })))
}

async fn set_value(
    State(values): State<Values>,
    Path(key): Path<String>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "WRONGPASS"})));
    }
    values.lock().insert(key, body);
    (StatusCode::OK, Json(json!({"result": "OK"})))
}

async fn unavailable() -> (StatusCode, &'static str) {
    (StatusCode::SERVICE_UNAVAILABLE, "upstream down")
}

/// Start a mock KV service on an ephemeral port
async fn spawn_kv() -> (SocketAddr, Values) {
    let values: Values = Arc::default();
    let app = Router::new()
        .route("/get/:key", get(get_value))
        .route("/set/:key", post(set_value))
        .route("/down/get/:key", get(unavailable))
        .route("/down/set/:key", post(unavailable))
        .with_state(values.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, values)
}

#[tokio::test]
async fn test_get_missing_key_is_absent() {
    let (addr, _) = spawn_kv().await;
    let store = RestKvStore::new(format!("http://{addr}"), TOKEN);

    assert!(store.get(DEFAULT_GRAPH_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_round_trip_through_manager() {
    let (addr, values) = spawn_kv().await;
    let store = RestKvStore::with_client(reqwest::Client::new(), format!("http://{addr}/"), TOKEN);
    let kb = KnowledgeGraphManager::new(Arc::new(store));

    kb.create_entities(vec![Entity::new("Alice", "Person")])
        .await
        .unwrap();

    let graph = kb.read_graph().await.unwrap();
    assert_eq!(graph.entities, vec![Entity::new("Alice", "Person")]);

    let raw = values.lock().get(DEFAULT_GRAPH_KEY).cloned().unwrap();
    assert_eq!(
        raw,
        r#"{"entities":[{"name":"Alice","entityType":"Person","observations":[]}],"relations":[]}"#
    );
}

#[tokio::test]
async fn test_error_body_surfaces_as_persistence_error() {
    let (addr, _) = spawn_kv().await;
    let store = RestKvStore::new(format!("http://{addr}"), "wrong");

    match store.get(DEFAULT_GRAPH_KEY).await.unwrap_err() {
        StoreError::Backend(message) => assert_eq!(message, "WRONGPASS"),
        other => panic!("unexpected error: {other}"),
    }

    let kb = KnowledgeGraphManager::new(Arc::new(store));
    assert!(kb.read_graph().await.unwrap().is_empty());

    let err = kb
        .create_entities(vec![Entity::new("Alice", "Person")])
        .await
        .unwrap_err();
    match err {
        GraphError::Persistence(StoreError::Backend(message)) => assert_eq!(message, "WRONGPASS"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_non_json_failure_status_is_backend_error() {
    let (addr, _) = spawn_kv().await;
    let store = RestKvStore::new(format!("http://{addr}/down"), TOKEN);

    match store.get(DEFAULT_GRAPH_KEY).await.unwrap_err() {
        StoreError::Backend(message) => assert!(message.contains("503"), "{message}"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(
        store.set(DEFAULT_GRAPH_KEY, "{}".to_string()).await,
        Err(StoreError::Backend(_))
    ));
}
