use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use crate::error::{PhraseGenError, Result};

const LOCK_WAIT: Duration = Duration::from_secs(5);
const LOCK_POLL: Duration = Duration::from_millis(20);

/// Phrases handed out by earlier runs.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UsedState {
    #[serde(default)]
    pub used: Vec<String>,
}

/// Read the used phrases stored at `path`. Missing file means none used yet.
pub fn read_used(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    let state: UsedState = serde_json::from_str(&content)?;
    Ok(state.used)
}

/// Store the used phrases at `path` using tmp+rename for atomicity.
pub fn write_used<'a, I>(path: &Path, phrases: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut used: Vec<String> = phrases.into_iter().map(str::to_string).collect();
    used.sort();
    let content = serde_json::to_string_pretty(&UsedState { used })?;

    let tmp = sibling(path, ".tmp.", "");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn sibling(path: &Path, prefix: &str, suffix: &str) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "state".to_string());
    path.with_file_name(format!("{}{}{}", prefix, file_name, suffix))
}

/// Exclusive hold on a state file across one read-generate-write cycle.
///
/// Backed by a `<state>.lock` file created with `create_new`; removed on drop.
#[derive(Debug)]
pub struct StateLock {
    path: PathBuf,
}

impl StateLock {
    /// Wait up to five seconds for other runs to release the state file.
    pub fn acquire(state_path: &Path) -> Result<Self> {
        Self::acquire_within(state_path, LOCK_WAIT)
    }

    pub fn acquire_within(state_path: &Path, wait: Duration) -> Result<Self> {
        let path = sibling(state_path, "", ".lock");
        let deadline = Instant::now() + wait;
        loop {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    writeln!(file, "{}", std::process::id())?;
                    debug!("Acquired {}", path.display());
                    return Ok(StateLock { path });
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    if Instant::now() >= deadline {
                        return Err(PhraseGenError::StateLocked(path));
                    }
                    thread::sleep(LOCK_POLL);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl Drop for StateLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
