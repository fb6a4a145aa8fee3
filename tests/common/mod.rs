#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use reqwest::Client;
use serde_json::{json, Value};

use leadboard::config::{Config, StoreBackend};
use leadboard::store::MemoryStore;

/// A running relay instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    /// Present when the app runs on the in-memory store.
    pub store: Option<Arc<MemoryStore>>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn store(&self) -> &MemoryStore {
        self.store.as_deref().expect("app was not spawned with a memory store")
    }

    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn put_json(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("put request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn delete(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("delete request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Get an HTML page, return (body, status).
    pub async fn get_page(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("page request failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }

    /// Post an HTML form, return (body, status, location header).
    pub async fn post_form(
        &self,
        path: &str,
        data: &[(&str, &str)],
    ) -> (String, StatusCode, Option<String>) {
        let resp = self
            .client
            .post(self.url(path))
            .form(data)
            .send()
            .await
            .expect("form request failed");
        let status = resp.status();
        let location = resp
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        (resp.text().await.unwrap_or_default(), status, location)
    }
}

pub fn jane_doe() -> Value {
    json!({
        "fullName": "Jane Doe",
        "phone": "555-1000",
        "email": "jane@x.com",
        "roles": "Designer",
        "budget": "",
        "talents": "",
        "persona": "",
        "additionalInfo": "",
    })
}

/// A record as a loosely-typed store may hold it: null optionals and a
/// numeric timestamp.
pub fn loose_record() -> Value {
    json!({
        "id": "7",
        "fullName": "Lee Park",
        "phone": "555-7000",
        "email": "lee@x.com",
        "roles": "Engineer",
        "budget": null,
        "talents": null,
        "persona": "Founder",
        "createdAt": 1700000000,
    })
}

pub fn test_config(addr: SocketAddr, store: StoreBackend) -> Config {
    Config {
        host: addr.ip(),
        port: addr.port(),
        base_url: format!("http://{addr}"),
        store,
        store_timeout: None,
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
    }
}

fn http_client() -> Client {
    Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server failed");
    });

    addr
}

/// Spawn the relay backed by an in-memory store.
pub async fn spawn_app() -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    let store = Arc::new(MemoryStore::new());
    let app = leadboard::build_app_with_store(
        test_config(addr, StoreBackend::Memory),
        store.clone(),
    );

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: http_client(),
        store: Some(store),
    }
}

/// Spawn the relay forwarding to an external store at `store_url`.
pub async fn spawn_app_with_remote(store_url: &str) -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    let config = test_config(
        addr,
        StoreBackend::Remote {
            base_url: store_url.to_string(),
        },
    );
    let app = leadboard::build_app(config).expect("Failed to build app");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: http_client(),
        store: None,
    }
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    listener.local_addr().unwrap()
}

// ── Fake hosted store ───────────────────────────────────────────

/// Stand-in for the hosted record store: JSON CRUD under `/submissions`,
/// string ids, and an extra `mockField` key on every created record.
pub struct FakeStore {
    pub addr: SocketAddr,
    pub records: Arc<Mutex<Vec<Value>>>,
}

impl FakeStore {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn records(&self) -> Vec<Value> {
        self.records.lock().unwrap().clone()
    }

    /// Put a record straight into the store, bypassing the relay.
    pub fn seed(&self, record: Value) {
        self.records.lock().unwrap().push(record);
    }
}

#[derive(Clone)]
struct FakeState {
    records: Arc<Mutex<Vec<Value>>>,
    next_id: Arc<AtomicU64>,
    failing: bool,
}

pub async fn spawn_fake_store() -> FakeStore {
    spawn_fake(false).await
}

/// A fake store that answers every request with 500.
pub async fn spawn_failing_store() -> FakeStore {
    spawn_fake(true).await
}

async fn spawn_fake(failing: bool) -> FakeStore {
    let records = Arc::new(Mutex::new(Vec::new()));
    let state = FakeState {
        records: records.clone(),
        next_id: Arc::new(AtomicU64::new(1)),
        failing,
    };

    let router = Router::new()
        .route("/submissions", get(fake_list).post(fake_create))
        .route("/submissions/{id}", put(fake_update).delete(fake_delete))
        .with_state(state);

    let addr = serve(router).await;
    FakeStore { addr, records }
}

fn fake_failure() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response()
}

fn fake_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!("Not found"))).into_response()
}

async fn fake_list(State(state): State<FakeState>) -> Response {
    if state.failing {
        return fake_failure();
    }
    Json(state.records.lock().unwrap().clone()).into_response()
}

async fn fake_create(State(state): State<FakeState>, Json(mut body): Json<Value>) -> Response {
    if state.failing {
        return fake_failure();
    }
    let id = state.next_id.fetch_add(1, Ordering::SeqCst);
    body["id"] = json!(id.to_string());
    body["mockField"] = json!("kept");
    state.records.lock().unwrap().push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn fake_update(
    State(state): State<FakeState>,
    Path(id): Path<String>,
    Json(mut body): Json<Value>,
) -> Response {
    if state.failing {
        return fake_failure();
    }
    let mut records = state.records.lock().unwrap();
    let Some(slot) = records.iter_mut().find(|r| r["id"] == json!(id)) else {
        return fake_not_found();
    };
    body["id"] = json!(id);
    *slot = body.clone();
    Json(body).into_response()
}

async fn fake_delete(State(state): State<FakeState>, Path(id): Path<String>) -> Response {
    if state.failing {
        return fake_failure();
    }
    let mut records = state.records.lock().unwrap();
    let Some(pos) = records.iter().position(|r| r["id"] == json!(id)) else {
        return fake_not_found();
    };
    let removed = records.remove(pos);
    Json(removed).into_response()
}
