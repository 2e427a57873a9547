//! Platform locations for config and data files.

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "Splash720", "SplashPalette")
}

/// `config.toml` in the platform config directory.
pub fn config_file() -> PathBuf {
    if let Some(dirs) = project_dirs() {
        dirs.config_dir().join("config.toml")
    } else {
        log::warn!("Unable to resolve project directory; using current dir for config");
        PathBuf::from("config.toml")
    }
}

/// Directory holding the palette store.
pub fn data_dir() -> PathBuf {
    if let Some(dirs) = project_dirs() {
        dirs.data_dir().to_path_buf()
    } else {
        log::warn!("Unable to resolve project directory; using current dir for data");
        PathBuf::from(".")
    }
}
