use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::Result;
use env_logger::{Env, Target};

pub const LOG_ENV: &str = "WORDBOOK_LOG";

pub fn log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wordbook")
        .join("wordbook.log")
}

/// Route `log` output into a file; the terminal belongs to the UI.
/// Filter comes from `WORDBOOK_LOG` and defaults to `info`.
pub fn init() -> Result<PathBuf> {
    let path = log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()?;

    Ok(path)
}
