use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PhraseGenError {
    #[error("All combinations have been used")]
    AllCombinationsUsed,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("State file is locked by another run: {0} (remove it if no run is active)")]
    StateLocked(PathBuf),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, PhraseGenError>;
