//! Test harness for catalog integration tests.
//!
//! Serves a fake dummyjson-style catalog over axum on an ephemeral local port,
//! so the real HTTP client is exercised end to end without network access.

pub mod fixtures;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use estore_core::catalog::HttpCatalog;
use estore_core::types::StoreConfig;
use serde_json::{json, Value};

/// How the fake catalog answers every request.
#[derive(Clone, Copy, PartialEq)]
pub enum Behavior {
    Healthy,
    ServerError,
    Garbage,
}

struct FakeState {
    behavior: Behavior,
    products: Vec<Value>,
}

pub struct FakeCatalog {
    pub base_url: String,
    _server: tokio::task::JoinHandle<()>,
}

impl FakeCatalog {
    /// Start serving `fixtures::products()` with the given behavior.
    pub async fn start(behavior: Behavior) -> Self {
        let state = Arc::new(FakeState { behavior, products: fixtures::products() });
        let app = Router::new()
            .route("/products", get(list_products))
            .route("/products/{id}", get(one_product))
            .with_state(state);

        let listener =
            tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind test port");
        let addr = listener.local_addr().expect("No local addr");
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake catalog crashed");
        });

        Self { base_url: format!("http://{addr}"), _server: server }
    }

    /// HTTP client pointed at this fake.
    pub fn client(&self) -> HttpCatalog {
        let config = StoreConfig { api_base: self.base_url.clone(), timeout_secs: 5, ..Default::default() };
        HttpCatalog::new(&config).expect("Failed to build client")
    }
}

fn misbehave(behavior: Behavior) -> Option<Response> {
    match behavior {
        Behavior::Healthy => None,
        Behavior::ServerError => Some((StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()),
        Behavior::Garbage => Some((StatusCode::OK, "<html>not json</html>").into_response()),
    }
}

async fn list_products(State(state): State<Arc<FakeState>>) -> Response {
    if let Some(resp) = misbehave(state.behavior) {
        return resp;
    }
    let total = state.products.len();
    Json(json!({ "products": state.products, "total": total, "skip": 0, "limit": total }))
        .into_response()
}

async fn one_product(State(state): State<Arc<FakeState>>, Path(id): Path<u64>) -> Response {
    if let Some(resp) = misbehave(state.behavior) {
        return resp;
    }
    match state.products.iter().find(|p| p["id"].as_u64() == Some(id)) {
        Some(p) => Json(p.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": format!("Product with id '{id}' not found") })))
            .into_response(),
    }
}
