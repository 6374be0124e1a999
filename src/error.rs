//! Error type for the I/O-facing parts of the crate.
//!
//! Table extraction itself never fails: "no table" is `None`. Errors only come
//! from reading config files and chat transcripts.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("transcript contains no messages")]
    EmptyTranscript,
}

pub type Result<T> = std::result::Result<T, Error>;
