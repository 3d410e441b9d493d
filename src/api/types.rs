// src/api/types.rs

use serde::{Deserialize, Serialize};

use crate::codegen::FileMap;
use crate::session::{Session, SessionSummary};
use crate::theme::CustomPalette;

/// Request body for UI generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub framework: String,
    /// Optional theme applied to the generated primary file.
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub palette: Option<CustomPalette>,
}

/// Response for generation: the assembled file set plus the initial cursor.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub files: FileMap,
    pub active_file: String,
}

/// Request body for correcting previously generated code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectRequest {
    #[serde(default)]
    pub initial_code: String,
    #[serde(default)]
    pub correction_prompt: String,
}

/// Request body for modifying code with freeform instructions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub instructions: String,
}

/// Response carrying revised source text.
#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub result: String,
}

/// Request body for preview compilation.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileRequest {
    #[serde(default)]
    pub files: FileMap,
}

/// Compile result. Build failures are results, not errors: the toolchain's
/// message comes back to the caller who owns the failing code.
#[derive(Debug, Serialize)]
pub struct CompileResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request body for saving a session. Framework arrives as a raw string so
/// an unknown value is reported as a 400 validation error, not a
/// deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSessionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub files: FileMap,
    #[serde(default)]
    pub framework: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub active_file: String,
    #[serde(default)]
    pub has_generated: bool,
}

/// Partial session update. Absent fields stay untouched; supplied falsy
/// values (`""`, `false`) are applied as-is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionRequest {
    pub name: Option<String>,
    pub files: Option<FileMap>,
    pub framework: Option<String>,
    pub prompt: Option<String>,
    pub active_file: Option<String>,
    pub has_generated: Option<bool>,
}

/// Response wrapping a full session.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub message: String,
    pub session: Session,
}

#[derive(Debug, Serialize)]
pub struct SessionDetailResponse {
    pub session: Session,
}

#[derive(Debug, Serialize)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionSummary>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
