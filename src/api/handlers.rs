// src/api/handlers.rs

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use crate::api::{auth, types::*, ApiState};
use crate::bundler::BundleOutcome;
use crate::codegen::{assemble::assemble, extract::extract, Framework};
use crate::infra::errors::FusionError;
use crate::provider::{derived_prompt, shape_prompt};
use crate::session::{NewSession, SessionPatch};
use crate::theme::apply_theme;

type Rejection = (StatusCode, Json<ErrorResponse>);

/// Convert a domain error into the HTTP rejection tuple. Internal detail is
/// logged here and replaced by the generic message.
fn reject(err: FusionError) -> Rejection {
    let status = match &err {
        FusionError::Validation(_) => StatusCode::BAD_REQUEST,
        FusionError::Conflict(_) => StatusCode::CONFLICT,
        FusionError::NotFound(_) => StatusCode::NOT_FOUND,
        FusionError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        FusionError::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        FusionError::Internal(source) => {
            tracing::error!("internal error: {source:#}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

fn internal(msg: &str) -> Rejection {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: msg.into() }),
    )
}

/// POST /api/v1/generate — prompt → model → extract → assemble → theme.
pub async fn generate_ui(
    State(state): State<ApiState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, Rejection> {
    let framework = Framework::parse(&body.framework).ok_or_else(|| {
        reject(FusionError::validation(
            "framework must be one of: tailwind, react, both",
        ))
    })?;

    let prompt = shape_prompt(&body.prompt, framework).map_err(reject)?;
    let raw = state.model.generate(&prompt).await.map_err(reject)?;

    let mut primary = extract(&raw);
    if let Some(ref theme) = body.theme {
        primary = apply_theme(&primary, theme, body.palette.as_ref());
    }

    let files = assemble(&primary, framework);
    let active_file = files.keys().next().cloned().unwrap_or_default();

    Ok(Json(GenerateResponse { files, active_file }))
}

/// POST /api/v1/correct — re-generate against existing code.
pub async fn correct_ui(
    State(state): State<ApiState>,
    Json(body): Json<CorrectRequest>,
) -> Result<Json<TextResponse>, Rejection> {
    if body.initial_code.trim().is_empty() {
        return Err(reject(FusionError::validation("initial code is required")));
    }
    let prompt = derived_prompt(&body.correction_prompt, &body.initial_code).map_err(reject)?;
    let raw = state.model.generate(&prompt).await.map_err(reject)?;

    Ok(Json(TextResponse {
        result: extract(&raw),
    }))
}

/// POST /api/v1/modify — apply freeform instructions to existing code.
pub async fn modify_code(
    State(state): State<ApiState>,
    Json(body): Json<ModifyRequest>,
) -> Result<Json<TextResponse>, Rejection> {
    if body.code.trim().is_empty() {
        return Err(reject(FusionError::validation("code is required")));
    }
    let prompt = derived_prompt(&body.instructions, &body.code).map_err(reject)?;
    let raw = state.model.generate(&prompt).await.map_err(reject)?;

    Ok(Json(TextResponse {
        result: extract(&raw),
    }))
}

/// POST /api/v1/compile — compile a file set into a preview bundle.
///
/// A build failure is a result (the caller owns the failing code), not an
/// HTTP error.
pub async fn compile_preview(
    State(state): State<ApiState>,
    Json(body): Json<CompileRequest>,
) -> Result<Json<CompileResponse>, Rejection> {
    if body.files.is_empty() {
        return Err(reject(FusionError::validation("files are required")));
    }

    let response = match state.compiler.compile(&body.files).await {
        BundleOutcome::Bundled(code) => CompileResponse {
            success: true,
            code: Some(code),
            error: None,
        },
        BundleOutcome::Failed(message) => CompileResponse {
            success: false,
            code: None,
            error: Some(message),
        },
    };

    Ok(Json(response))
}

/// POST /api/v1/sessions — save a new session.
pub async fn create_session(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(body): Json<SaveSessionRequest>,
) -> Result<Json<SessionResponse>, Rejection> {
    let owner = auth::resolve_owner(&state, &headers).map_err(reject)?;

    let framework = Framework::parse(&body.framework).ok_or_else(|| {
        reject(FusionError::validation(
            "framework must be one of: tailwind, react, both",
        ))
    })?;
    let new = NewSession {
        name: body.name,
        files: body.files,
        framework,
        prompt: body.prompt,
        active_file: body.active_file,
        has_generated: body.has_generated,
    };

    let store = state
        .store
        .lock()
        .map_err(|_| internal("session store unavailable"))?;
    let session = store.create(&owner, new).map_err(reject)?;

    Ok(Json(SessionResponse {
        message: "Session saved".into(),
        session,
    }))
}

/// GET /api/v1/sessions — list the owner's sessions, newest first.
pub async fn list_sessions(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> Result<Json<SessionListResponse>, Rejection> {
    let owner = auth::resolve_owner(&state, &headers).map_err(reject)?;

    let store = state
        .store
        .lock()
        .map_err(|_| internal("session store unavailable"))?;
    let sessions = store.list(&owner).map_err(reject)?;

    Ok(Json(SessionListResponse { sessions }))
}

/// GET /api/v1/sessions/{id} — fetch one session with its full file set.
pub async fn get_session(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<SessionDetailResponse>, Rejection> {
    let owner = auth::resolve_owner(&state, &headers).map_err(reject)?;

    let store = state
        .store
        .lock()
        .map_err(|_| internal("session store unavailable"))?;
    let session = store.get(&owner, &id).map_err(reject)?;

    Ok(Json(SessionDetailResponse { session }))
}

/// PUT /api/v1/sessions/{id} — partial update; only supplied fields change.
pub async fn update_session(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<UpdateSessionRequest>,
) -> Result<Json<SessionResponse>, Rejection> {
    let owner = auth::resolve_owner(&state, &headers).map_err(reject)?;

    let framework = match body.framework {
        Some(ref s) => Some(Framework::parse(s).ok_or_else(|| {
            reject(FusionError::validation(
                "framework must be one of: tailwind, react, both",
            ))
        })?),
        None => None,
    };
    let patch = SessionPatch {
        name: body.name,
        files: body.files,
        framework,
        prompt: body.prompt,
        active_file: body.active_file,
        has_generated: body.has_generated,
    };

    let store = state
        .store
        .lock()
        .map_err(|_| internal("session store unavailable"))?;
    let session = store.update(&owner, &id, patch).map_err(reject)?;

    Ok(Json(SessionResponse {
        message: "Session updated successfully".into(),
        session,
    }))
}

/// DELETE /api/v1/sessions/{id}
pub async fn delete_session(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, Rejection> {
    let owner = auth::resolve_owner(&state, &headers).map_err(reject)?;

    let store = state
        .store
        .lock()
        .map_err(|_| internal("session store unavailable"))?;
    store.delete(&owner, &id).map_err(reject)?;

    Ok(Json(MessageResponse {
        message: "Session deleted successfully".into(),
    }))
}

/// GET /api/v1/health — unauthenticated liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
