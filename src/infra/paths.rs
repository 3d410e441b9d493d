// src/infra/paths.rs — Path management
//
// All paths respect the FRONTFUSION_HOME environment variable for isolation.
// When FRONTFUSION_HOME is set, config and data live under that directory.
// When unset, config uses ~/.frontfusion/ and data uses XDG_DATA_HOME/frontfusion.

use directories::ProjectDirs;
use std::path::PathBuf;
use std::sync::OnceLock;

static PROJECT_DIRS: OnceLock<ProjectDirs> = OnceLock::new();

fn project_dirs() -> &'static ProjectDirs {
    PROJECT_DIRS.get_or_init(|| {
        ProjectDirs::from("", "", "frontfusion").expect("Could not determine home directory")
    })
}

/// Returns the FRONTFUSION_HOME override, if set.
fn frontfusion_home() -> Option<PathBuf> {
    std::env::var_os("FRONTFUSION_HOME").map(PathBuf::from)
}

/// Configuration directory: $FRONTFUSION_HOME/ or ~/.frontfusion/
pub fn config_dir() -> PathBuf {
    if let Some(home) = frontfusion_home() {
        return home;
    }
    dirs_home().join(".frontfusion")
}

/// Data directory: $FRONTFUSION_HOME/data/ or XDG_DATA_HOME/frontfusion
pub fn data_dir() -> PathBuf {
    if let Some(home) = frontfusion_home() {
        return home.join("data");
    }
    project_dirs().data_local_dir().to_path_buf()
}

/// Home directory
pub fn dirs_home() -> PathBuf {
    directories::BaseDirs::new()
        .expect("Could not determine home directory")
        .home_dir()
        .to_path_buf()
}

/// Database path
pub fn db_path() -> PathBuf {
    data_dir().join("frontfusion.db")
}

/// Root under which the bundler allocates its per-invocation workspaces
pub fn workspaces_dir() -> PathBuf {
    data_dir().join("workspaces")
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Ensure all required directories exist
pub async fn ensure_dirs() -> anyhow::Result<()> {
    let dirs = [config_dir(), data_dir(), workspaces_dir()];

    for dir in &dirs {
        tokio::fs::create_dir_all(dir).await?;
    }

    Ok(())
}
