use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// The one caller-visible failure: "Invalid request". Variants only differ in
/// what gets logged; every one answers 500 with the same body.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("missing or empty auth token")]
    MissingAuthToken,
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("unknown method: {0}")]
    UnknownMethod(String),
    #[error("bad params for {method}: {reason}")]
    BadParams { method: String, reason: String },
    #[error("could not encode response: {0}")]
    Encode(String),
}

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

pub fn ok(data: serde_json::Value) -> serde_json::Value {
    json!({
        "hasError": false,
        "data": data,
    })
}

pub fn bad_params(method: &str, reason: impl Into<String>) -> RpcError {
    RpcError::BadParams {
        method: method.to_string(),
        reason: reason.into(),
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "rejecting request");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": INTERNAL_ERROR_MESSAGE })),
        )
            .into_response()
    }
}
