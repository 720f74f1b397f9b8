//! HTTP surface: two routes over the RPC dispatcher.
//!
//! `GET /getUserPrmissions` checks the auth token header.
//! `POST /handler` takes `{method, params}` and returns the `{hasError, data}` envelope.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::rpc::{self, AppState, RpcError};

pub const AUTH_TOKEN_HEADERS: [&str; 2] = ["auth_token", "auth-token"];

/// Route spelling is the one existing clients call.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/getUserPrmissions", get(user_permissions))
        .route("/handler", post(handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_token(headers: &HeaderMap) -> Option<&str> {
    AUTH_TOKEN_HEADERS
        .iter()
        .filter_map(|name| headers.get(*name))
        .find_map(|v| v.to_str().ok())
}

async fn user_permissions(headers: HeaderMap) -> Result<Json<serde_json::Value>, RpcError> {
    rpc::user_permissions(auth_token(&headers)).map(Json)
}

async fn handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, RpcError> {
    rpc::handle_request(&state, &body).map(Json)
}
