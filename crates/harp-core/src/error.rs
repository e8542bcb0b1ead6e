use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HAR file not found: {}", .0.display())]
    ArchiveNotFound(PathBuf),

    #[error("Failed to read HAR file {}: {source}", .path.display())]
    ArchiveUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse HAR file {}: {source}", .path.display())]
    MalformedArchive {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No entry with a URL containing {0:?}")]
    NoMatchingEntry(String),

    #[error("Unsupported request method: {0}")]
    UnsupportedMethod(String),

    #[error("Unsupported content encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Invalid content: {0}")]
    InvalidContent(String),
}

impl Error {
    /// Map an I/O failure on `path` to the archive error it represents.
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Error::ArchiveNotFound(path),
            _ => Error::ArchiveUnreadable { path, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
