// src/bundler/mod.rs — Compile a generated file set into a preview bundle
//
// Each invocation stages the file set into its own uniquely-named workspace
// directory, runs the external build toolchain against the fixed entry
// point, and removes the workspace unconditionally afterward. Workspaces are
// never shared between invocations, so concurrent compiles cannot collide;
// a semaphore bounds how many toolchain processes run at once.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::process::Command;
use tokio::sync::Semaphore;

use crate::codegen::assemble::BOOTSTRAP_ENTRY;
use crate::codegen::FileMap;
use crate::infra::config::BundlerConfig;
use crate::infra::paths;

/// Result of a compile call. Failures carry the toolchain's message; this
/// boundary never propagates an error upward.
#[derive(Debug)]
pub enum BundleOutcome {
    Bundled(String),
    Failed(String),
}

impl BundleOutcome {
    pub fn is_bundled(&self) -> bool {
        matches!(self, Self::Bundled(_))
    }
}

pub struct BundleCompiler {
    workspace_root: PathBuf,
    command: String,
    args: Vec<String>,
    permits: Arc<Semaphore>,
}

impl BundleCompiler {
    pub fn new(workspace_root: PathBuf, command: String, args: Vec<String>, max_concurrent: usize) -> Self {
        Self {
            workspace_root,
            command,
            args,
            permits: Arc::new(Semaphore::new(max_concurrent.max(1))),
        }
    }

    pub fn from_config(config: &BundlerConfig) -> Self {
        let root = config
            .workspace_root
            .clone()
            .unwrap_or_else(paths::workspaces_dir);
        Self::new(root, config.command.clone(), config.args.clone(), config.max_concurrent)
    }

    /// Compile the file set into a single in-memory bundle.
    ///
    /// The workspace is deleted on every exit path; a cleanup failure is
    /// logged, never returned as the operation's result.
    pub async fn compile(&self, files: &FileMap) -> BundleOutcome {
        let _permit = match self.permits.acquire().await {
            Ok(p) => p,
            Err(_) => return BundleOutcome::Failed("bundler is shut down".into()),
        };

        // Fresh directory per invocation; the request id in the name keeps
        // concurrent compiles isolated.
        let workspace = self
            .workspace_root
            .join(format!("build-{}", uuid::Uuid::new_v4()));

        let outcome = self.stage_and_build(&workspace, files).await;

        if let Err(e) = tokio::fs::remove_dir_all(&workspace).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("workspace cleanup failed for {:?}: {e}", workspace);
            }
        }

        outcome
    }

    async fn stage_and_build(&self, workspace: &Path, files: &FileMap) -> BundleOutcome {
        if !files.contains_key(BOOTSTRAP_ENTRY) {
            return BundleOutcome::Failed(format!("missing entry point {BOOTSTRAP_ENTRY}"));
        }

        if let Err(e) = tokio::fs::create_dir_all(workspace).await {
            return BundleOutcome::Failed(format!("could not create workspace: {e}"));
        }

        for (path, content) in files {
            let Some(text) = content.as_str() else {
                return BundleOutcome::Failed(format!("file '{path}' content must be a string"));
            };
            if !is_safe_relative(Path::new(path)) {
                return BundleOutcome::Failed(format!("invalid file path '{path}'"));
            }

            let target = workspace.join(path);
            if let Some(parent) = target.parent() {
                if let Err(e) = tokio::fs::create_dir_all(parent).await {
                    return BundleOutcome::Failed(format!("could not stage '{path}': {e}"));
                }
            }
            if let Err(e) = tokio::fs::write(&target, text).await {
                return BundleOutcome::Failed(format!("could not stage '{path}': {e}"));
            }
        }

        tracing::debug!("Running: {} in {:?}", self.command, workspace);

        let output = match Command::new(&self.command)
            .args(&self.args)
            .arg(BOOTSTRAP_ENTRY)
            .current_dir(workspace)
            .output()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                return BundleOutcome::Failed(format!(
                    "build toolchain '{}' failed to start: {e}",
                    self.command
                ));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return BundleOutcome::Failed(stderr.trim().to_string());
        }

        BundleOutcome::Bundled(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Staged paths must stay inside the workspace.
fn is_safe_relative(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_relative_paths() {
        assert!(is_safe_relative(Path::new("index.html")));
        assert!(is_safe_relative(Path::new("src/App.jsx")));
        assert!(is_safe_relative(Path::new("./src/App.jsx")));
    }

    #[test]
    fn test_unsafe_paths_rejected() {
        assert!(!is_safe_relative(Path::new("../escape.js")));
        assert!(!is_safe_relative(Path::new("src/../../escape.js")));
        assert!(!is_safe_relative(Path::new("/etc/passwd")));
        assert!(!is_safe_relative(Path::new("")));
    }
}
