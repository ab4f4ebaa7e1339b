//! Local axum backend for client tests.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

use crate::client::{BackendClient, ClientConfig};

/// Recorded traffic and canned answers.
#[derive(Default)]
pub(crate) struct Backend {
    /// Setting key -> raw response body. Missing keys answer 404.
    pub settings: HashMap<String, String>,
    /// Company ids seen per setting request, as raw query values.
    pub seen_company: Mutex<Vec<Option<String>>>,
    /// Login bodies received.
    pub logins: Mutex<Vec<Value>>,
}

async fn public_setting(
    State(backend): State<Arc<Backend>>,
    Path(key): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<String, StatusCode> {
    backend
        .seen_company
        .lock()
        .push(query.get("companyId").cloned());
    backend
        .settings
        .get(&key)
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)
}

async fn login(
    State(backend): State<Arc<Backend>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    backend.logins.lock().push(body.clone());
    if body["password"] == "correct" {
        Ok(Json(json!({
            "token": "tok-123",
            "user": { "id": 7, "name": "Ana", "email": body["email"] }
        })))
    } else {
        Err(StatusCode::UNAUTHORIZED)
    }
}

/// Serves `backend` on an ephemeral port and returns a client pointed at it.
pub(crate) async fn serve(backend: Arc<Backend>) -> BackendClient {
    let app = Router::new()
        .route("/public-settings/{key}", get(public_setting))
        .route("/auth/login", post(login))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    BackendClient::new(ClientConfig::new(format!("http://{}", addr))).unwrap()
}
