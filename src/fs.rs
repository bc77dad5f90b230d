use std::fs;
use std::path::PathBuf;
use log::error;

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|path| path.join(".dnsprobe"))
}

pub fn ensure_config_dir() -> Option<PathBuf> {
    let path = config_dir()?;

    if !path.exists() {
        if let Err(err) = fs::create_dir_all(&path) {
            error!("failed to create {}: {}", path.display(), err);

            return None;
        }
    }

    Some(path)
}
