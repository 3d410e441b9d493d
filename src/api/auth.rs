// src/api/auth.rs

use axum::http::HeaderMap;

use crate::api::ApiState;
use crate::infra::errors::FusionError;

/// Resolve the bearer token to an owner id.
///
/// This layer does not mint or verify credentials itself; it only maps an
/// already-issued token to the opaque owner reference every session
/// operation is scoped to.
pub fn resolve_owner(state: &ApiState, headers: &HeaderMap) -> Result<String, FusionError> {
    let auth_header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth_header.strip_prefix("Bearer ").unwrap_or("");

    for (known, owner) in state.owners.iter() {
        if constant_time_eq(token.as_bytes(), known.as_bytes()) {
            return Ok(owner.clone());
        }
    }

    Err(FusionError::Unauthorized(
        "Invalid or missing bearer token".into(),
    ))
}

/// Constant-time byte comparison to prevent timing attacks on token auth.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
