//! Locations of the files skyflap keeps under ~/.skyflap/.

use super::constants::{CONFIG_FILE_NAME, DATA_DIR_NAME, LOG_FILE_NAME};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Get the ~/.skyflap/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default config file path (~/.skyflap/config.json).
pub fn config_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join(CONFIG_FILE_NAME))
}

/// Log file path (~/.skyflap/skyflap.log).
pub fn log_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_exists() {
        let dir = data_dir().expect("data_dir should succeed");
        assert!(dir.exists());
        assert!(dir.ends_with(".skyflap"));
    }

    #[test]
    fn test_file_paths_live_in_data_dir() {
        let config = config_path().expect("config_path should succeed");
        let log = log_path().expect("log_path should succeed");
        assert!(config.to_string_lossy().ends_with(".skyflap/config.json"));
        assert!(log.to_string_lossy().ends_with(".skyflap/skyflap.log"));
    }
}
