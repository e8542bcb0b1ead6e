use super::types::Har;
use crate::{Error, Result};
use std::path::Path;

pub struct HarReader;

impl HarReader {
    /// Read and parse a HAR file without blocking the runtime
    pub async fn load(path: &Path) -> Result<Har> {
        tracing::debug!("Loading HAR file from: {}", path.display());

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| Error::from_io(path.to_path_buf(), e))?;
        let har: Har =
            serde_json::from_slice(&bytes).map_err(|source| Error::MalformedArchive {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(
            "Loaded HAR file with {} entries from {}",
            har.log.entries.len(),
            path.display()
        );

        Ok(har)
    }

    /// Parse a HAR document from a JSON string
    pub fn from_str(content: &str) -> Result<Har> {
        tracing::debug!("Parsing HAR from string");

        let har: Har = serde_json::from_str(content).map_err(|source| Error::MalformedArchive {
            path: "<string>".into(),
            source,
        })?;

        tracing::debug!(
            "Parsed HAR from string with {} entries",
            har.log.entries.len()
        );

        Ok(har)
    }
}
