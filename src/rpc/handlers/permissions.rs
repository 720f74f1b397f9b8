use serde_json::json;

use crate::rpc::error::RpcError;

/// Any non-empty token grants everything; there is no real auth behind it.
pub fn user_permissions(auth_token: Option<&str>) -> Result<serde_json::Value, RpcError> {
    match auth_token {
        Some(token) if !token.is_empty() => Ok(json!({ "all": true })),
        _ => Err(RpcError::MissingAuthToken),
    }
}
