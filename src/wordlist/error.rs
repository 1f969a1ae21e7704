use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not read word file {}: {source}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("No bundled word list named {0:?}")]
    UnknownList(String),
    #[error("Could not inflate bundled word list: {0}")]
    Inflate(#[from] std::io::Error),
}
