// src/session/store.rs — SQLite operations for sessions

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

use crate::codegen::{FileMap, Framework};
use crate::infra::errors::FusionError;

/// A named, owner-scoped snapshot of a generation: prompt, output files,
/// chosen output framework, and UI cursor state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub files: FileMap,
    pub framework: Framework,
    pub prompt: String,
    pub active_file: String,
    pub has_generated: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Session {
    /// Resolve the UI cursor. `active_file` is an unchecked hint at write
    /// time; a dangling or empty reference resolves to "no active file".
    pub fn resolved_active_file(&self) -> Option<&str> {
        if !self.active_file.is_empty() && self.files.contains_key(&self.active_file) {
            Some(self.active_file.as_str())
        } else {
            None
        }
    }
}

/// Projection used by list views; the files payload is withheld for size.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub id: String,
    pub name: String,
    pub framework: Framework,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields for session creation.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub name: String,
    pub files: FileMap,
    pub framework: Framework,
    pub prompt: String,
    pub active_file: String,
    pub has_generated: bool,
}

/// Partial update. Each field is independently optional: only supplied
/// fields are applied. `active_file` and `has_generated` use explicit
/// presence — a supplied `""` or `false` is persisted as such.
#[derive(Debug, Clone, Default)]
pub struct SessionPatch {
    pub name: Option<String>,
    pub files: Option<FileMap>,
    pub framework: Option<Framework>,
    pub prompt: Option<String>,
    pub active_file: Option<String>,
    pub has_generated: Option<bool>,
}

/// Owner-scoped CRUD over the sessions table.
pub struct SessionStore {
    conn: Connection,
}

impl SessionStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, owner_id: &str, new: NewSession) -> Result<Session, FusionError> {
        let name = validate_name(&new.name)?;
        validate_files(&new.files)?;

        // Fast-path duplicate check for a friendly message; the unique index
        // is the authoritative guard under races.
        if self.name_taken(owner_id, &name, None)? {
            return Err(FusionError::conflict("a session with this name already exists"));
        }

        let now = Utc::now().to_rfc3339();
        let session = Session {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            name,
            files: new.files,
            framework: new.framework,
            prompt: new.prompt,
            active_file: new.active_file,
            has_generated: new.has_generated,
            created_at: now.clone(),
            updated_at: now,
        };

        self.conn.execute(
            "INSERT INTO sessions (id, owner_id, name, files, framework, prompt,
             active_file, has_generated, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                session.id,
                session.owner_id,
                session.name,
                serde_json::to_string(&session.files)?,
                session.framework.as_str(),
                session.prompt,
                session.active_file,
                session.has_generated,
                session.created_at,
                session.updated_at,
            ],
        )?;

        Ok(session)
    }

    /// All sessions for the owner, newest first, summary fields only.
    pub fn list(&self, owner_id: &str) -> Result<Vec<SessionSummary>, FusionError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, framework, created_at, updated_at
             FROM sessions WHERE owner_id = ?1
             ORDER BY created_at DESC",
        )?;

        let rows = stmt.query_map(params![owner_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut result = Vec::new();
        for row in rows {
            let (id, name, framework, created_at, updated_at) = row?;
            result.push(SessionSummary {
                id,
                name,
                framework: parse_stored_framework(&framework)?,
                created_at,
                updated_at,
            });
        }
        Ok(result)
    }

    /// Fetch a session by id. A session that exists but belongs to another
    /// owner is reported identically to a missing one.
    pub fn get(&self, owner_id: &str, id: &str) -> Result<Session, FusionError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, owner_id, name, files, framework, prompt,
                 active_file, has_generated, created_at, updated_at
                 FROM sessions WHERE id = ?1 AND owner_id = ?2",
                params![id, owner_id],
                |row| {
                    Ok(SessionRow {
                        id: row.get(0)?,
                        owner_id: row.get(1)?,
                        name: row.get(2)?,
                        files: row.get(3)?,
                        framework: row.get(4)?,
                        prompt: row.get(5)?,
                        active_file: row.get(6)?,
                        has_generated: row.get(7)?,
                        created_at: row.get(8)?,
                        updated_at: row.get(9)?,
                    })
                },
            )
            .optional()?;

        match row {
            Some(row) => row.into_session(),
            None => Err(FusionError::not_found("session not found")),
        }
    }

    /// Partial update; last write wins, no optimistic locking.
    pub fn update(
        &self,
        owner_id: &str,
        id: &str,
        patch: SessionPatch,
    ) -> Result<Session, FusionError> {
        let mut session = self.get(owner_id, id)?;

        if let Some(ref name) = patch.name {
            let name = validate_name(name)?;
            if name != session.name && self.name_taken(owner_id, &name, Some(id))? {
                return Err(FusionError::conflict("a session with this name already exists"));
            }
            session.name = name;
        }
        if let Some(files) = patch.files {
            validate_files(&files)?;
            session.files = files;
        }
        if let Some(framework) = patch.framework {
            session.framework = framework;
        }
        if let Some(prompt) = patch.prompt {
            session.prompt = prompt;
        }
        // Explicit presence, not truthiness: "" and false are applied.
        if let Some(active_file) = patch.active_file {
            session.active_file = active_file;
        }
        if let Some(has_generated) = patch.has_generated {
            session.has_generated = has_generated;
        }

        session.updated_at = Utc::now().to_rfc3339();

        self.conn.execute(
            "UPDATE sessions SET name = ?1, files = ?2, framework = ?3, prompt = ?4,
             active_file = ?5, has_generated = ?6, updated_at = ?7
             WHERE id = ?8 AND owner_id = ?9",
            params![
                session.name,
                serde_json::to_string(&session.files)?,
                session.framework.as_str(),
                session.prompt,
                session.active_file,
                session.has_generated,
                session.updated_at,
                id,
                owner_id,
            ],
        )?;

        Ok(session)
    }

    /// Delete a session; not-found if absent or not owned.
    pub fn delete(&self, owner_id: &str, id: &str) -> Result<(), FusionError> {
        let deleted = self.conn.execute(
            "DELETE FROM sessions WHERE id = ?1 AND owner_id = ?2",
            params![id, owner_id],
        )?;

        if deleted == 0 {
            return Err(FusionError::not_found("session not found"));
        }
        Ok(())
    }

    fn name_taken(
        &self,
        owner_id: &str,
        name: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, FusionError> {
        let existing: Option<String> = self
            .conn
            .query_row(
                "SELECT id FROM sessions
                 WHERE owner_id = ?1 AND name = ?2 AND id != ?3",
                params![owner_id, name, exclude_id.unwrap_or("")],
                |row| row.get(0),
            )
            .optional()?;
        Ok(existing.is_some())
    }

    /// Get a reference to the underlying connection (for advanced queries).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

struct SessionRow {
    id: String,
    owner_id: String,
    name: String,
    files: String,
    framework: String,
    prompt: String,
    active_file: String,
    has_generated: bool,
    created_at: String,
    updated_at: String,
}

impl SessionRow {
    fn into_session(self) -> Result<Session, FusionError> {
        Ok(Session {
            files: serde_json::from_str(&self.files)?,
            framework: parse_stored_framework(&self.framework)?,
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            prompt: self.prompt,
            active_file: self.active_file,
            has_generated: self.has_generated,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn parse_stored_framework(s: &str) -> Result<Framework, FusionError> {
    Framework::parse(s)
        .ok_or_else(|| FusionError::Internal(anyhow::anyhow!("corrupt framework value: {s}")))
}

fn validate_name(name: &str) -> Result<String, FusionError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FusionError::validation("session name is required"));
    }
    Ok(name.to_string())
}

/// Shallow textual guard against storing obviously executable payloads
/// verbatim. Not a security boundary.
fn validate_files(files: &FileMap) -> Result<(), FusionError> {
    if files.is_empty() {
        return Err(FusionError::validation("session files are required"));
    }
    for (path, content) in files {
        let Some(text) = content.as_str() else {
            return Err(FusionError::validation(format!(
                "file '{path}' content must be a string"
            )));
        };
        if text.contains("<script>") || text.contains("eval(") {
            return Err(FusionError::validation("invalid code content detected"));
        }
    }
    Ok(())
}
