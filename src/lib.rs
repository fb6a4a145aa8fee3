pub mod config;
pub mod error;
pub mod state;
pub mod models;
pub mod routes;
pub mod views;
pub mod store;
pub mod client;
pub mod submission;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::client::Gateway;
use crate::config::{Config, StoreBackend};
use crate::state::{AppState, SharedState};
use crate::store::{MemoryStore, RemoteStore, StoreError, SubmissionStore};

/// Build the store named by `config.store`.
pub fn build_store(config: &Config) -> Result<Arc<dyn SubmissionStore>, StoreError> {
    let store: Arc<dyn SubmissionStore> = match &config.store {
        StoreBackend::Remote { base_url } => {
            Arc::new(RemoteStore::new(base_url, config.store_timeout)?)
        }
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
    };
    Ok(store)
}

pub fn build_app(config: Config) -> Result<Router, StoreError> {
    let store = build_store(&config)?;
    Ok(build_app_with_store(config, store))
}

pub fn build_app_with_store(config: Config, store: Arc<dyn SubmissionStore>) -> Router {
    tracing::info!("Using {} submission store", store.name());

    let gateway = Gateway::new(&config.base_url);
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        config,
        store,
        gateway,
    });

    Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .route("/health", axum::routing::get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(max_body_size))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                )),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
