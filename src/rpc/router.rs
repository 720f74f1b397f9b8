use super::error::RpcError;
use super::handlers;
use super::types::{AppState, Request};

/// Decodes a raw `/handler` body and dispatches it by `method`.
pub fn handle_request(state: &AppState, body: &[u8]) -> Result<serde_json::Value, RpcError> {
    let req: Request =
        serde_json::from_slice(body).map_err(|e| RpcError::MalformedBody(e.to_string()))?;
    tracing::debug!(method = %req.method, "dispatching");

    if let Some(resp) = handlers::schedule::try_handle(state, &req) {
        return resp;
    }

    Err(RpcError::UnknownMethod(req.method))
}
