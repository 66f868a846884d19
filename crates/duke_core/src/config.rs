use crate::error::DukeError;
use std::path::PathBuf;

const SAVE_FILE_NAME: &str = "duke.txt";
const SAVE_PATH_ENV_VAR: &str = "DUKE_SAVE_PATH";

/// Resolves the save-file location: `DUKE_SAVE_PATH` when set, otherwise a
/// fixed per-user path under the platform config directory.
pub fn save_path() -> Result<PathBuf, DukeError> {
    if let Ok(path) = std::env::var(SAVE_PATH_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| DukeError::io("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata).join("duke").join(SAVE_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| DukeError::io("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("duke")
            .join(SAVE_FILE_NAME))
    }
}
