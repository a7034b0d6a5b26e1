use crate::error::{AppError, AppResult};
use std::path::PathBuf;

/// Environment variable to override the default Envelope data directory.
const ENV_DATA_DIR: &str = "ENVELOPE_HOME";

/// Returns the base directory holding Envelope's `config.toml`.
///
/// Checks for `ENVELOPE_HOME` first. If not set, falls back to
/// `~/.envelope` (or equivalent on Windows).
///
/// # Returns
/// * `Ok(PathBuf)` - The base directory path
/// * `Err(AppError)` - If the override is relative or no home directory exists
pub fn get_base_dir() -> AppResult<PathBuf> {
    if let Ok(env_path) = std::env::var(ENV_DATA_DIR) {
        let path = PathBuf::from(env_path);
        if !path.is_absolute() {
            return Err(AppError::Config(format!(
                "Environment variable {} must be an absolute path, got: {:?}",
                ENV_DATA_DIR, path
            )));
        }
        return Ok(path);
    }

    match dirs::home_dir() {
        Some(home) => Ok(home.join(".envelope")),
        None => Err(AppError::Config(
            "Cannot determine home directory. Please set ENVELOPE_HOME environment variable."
                .to_string(),
        )),
    }
}
