// Data directory resolution for the expense database

use std::io;
use std::path::PathBuf;

/// Environment variable overriding the default data directory.
pub const DATA_DIR_ENV: &str = "GASTOVOZ_DATA_DIR";

/// Resolve the directory holding the expense database: the environment
/// override when set, otherwise the platform data directory.
pub fn get_data_dir() -> io::Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    dirs::data_dir()
        .map(|dir| dir.join("gastovoz"))
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no platform data directory"))
}
