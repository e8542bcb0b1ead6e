use anyhow::{Context, Result};
use harp_core::filter::{self, UrlFilter};
use harp_core::har::HarReader;
use std::io::Write;
use std::path::Path;

/// Write every entry whose URL contains `filter` as `METHOD: url`, without
/// replaying anything
pub async fn execute(file: &Path, filter: &str, out: &mut dyn Write) -> Result<()> {
    tracing::debug!("Listing entries of HAR file: {}", file.display());

    let har = HarReader::load(file)
        .await
        .with_context(|| format!("Could not load archive {}", file.display()))?;

    let url_filter = UrlFilter::new(filter);
    let matched = filter::filter_entries(&har.log.entries, &url_filter);
    if matched.is_empty() {
        return Err(harp_core::Error::NoMatchingEntry(filter.to_string()).into());
    }

    for entry in &matched {
        writeln!(out, "{}: {}", entry.request.method, entry.request.url)?;
    }
    out.flush()?;

    tracing::info!(
        "{} of {} entries match",
        matched.len(),
        har.log.entries.len()
    );

    Ok(())
}
