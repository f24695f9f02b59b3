use std::fs;
use std::path::{Path, PathBuf};

/// The display name is the only state that outlives a session.
pub const NAME_FILE: &str = ".tractor_player_name";

pub const MAX_NAME_LEN: usize = 20;

pub fn default_name_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("TRACTOR_NAME_FILE") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(NAME_FILE))
}

/// Reads the saved display name, if any. A missing file is not an error.
pub fn load_saved_name(path: &Path) -> Result<Option<String>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let body = fs::read_to_string(path).map_err(|err| err.to_string())?;
    let name = body.trim();
    if name.is_empty() {
        Ok(None)
    } else {
        Ok(Some(truncate_name(name)))
    }
}

pub fn save_name(path: &Path, name: &str) -> Result<(), String> {
    fs::write(path, truncate_name(name.trim())).map_err(|err| err.to_string())
}

/// Names are capped at the server's limit on the way out and on the way in.
pub fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_NAME_LEN).collect()
}
