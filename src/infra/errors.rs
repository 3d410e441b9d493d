// src/infra/errors.rs — Error types for FrontFusion

use thiserror::Error;

/// Error taxonomy for the whole crate.
///
/// Every boundary operation converts internal failures into one of these
/// variants before returning; callers above the API boundary never see a raw
/// rusqlite/reqwest/io error. Upstream and Internal variants carry detail for
/// the log only — the user-facing message stays generic.
#[derive(Error, Debug)]
pub enum FusionError {
    // Bad input — reported immediately, never retried
    #[error("{0}")]
    Validation(String),

    // Duplicate (owner, name) — caller must choose a new name
    #[error("{0}")]
    Conflict(String),

    // Absent or owned by someone else — indistinguishable on purpose
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    // Generative model or build toolchain failed; detail is logged, not shown
    #[error("generation failed, please try again later")]
    Upstream,

    // Storage / filesystem fault; the payload is for the log, not the user
    #[error("internal error")]
    Internal(anyhow::Error),
}

impl FusionError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl From<rusqlite::Error> for FusionError {
    fn from(e: rusqlite::Error) -> Self {
        // Unique-index violations surface as conflicts; the storage-level
        // constraint is the authoritative uniqueness check under races.
        if let rusqlite::Error::SqliteFailure(ref err, _) = e {
            if err.code == rusqlite::ErrorCode::ConstraintViolation {
                return Self::Conflict("a session with this name already exists".into());
            }
        }
        Self::Internal(anyhow::Error::new(e))
    }
}

impl From<std::io::Error> for FusionError {
    fn from(e: std::io::Error) -> Self {
        Self::Internal(anyhow::Error::new(e))
    }
}

impl From<serde_json::Error> for FusionError {
    fn from(e: serde_json::Error) -> Self {
        Self::Internal(anyhow::Error::new(e))
    }
}
