use anyhow::{Context, Result};
use harp_core::filter::{self, UrlFilter};
use harp_core::har::HarReader;
use harp_replay::{ReplayConfig, Replayer};
use std::io::Write;
use std::path::Path;

/// Replay the first entry of `file` whose URL contains `filter` and write the
/// response body to `out` as pretty-printed JSON.
///
/// Nothing is written to `out` unless the replay succeeds.
pub async fn execute(
    file: &Path,
    filter: &str,
    config: &ReplayConfig,
    out: &mut dyn Write,
) -> Result<()> {
    tracing::debug!("Replaying from HAR file: {}", file.display());

    let har = HarReader::load(file)
        .await
        .with_context(|| format!("Could not load archive {}", file.display()))?;

    let entry = filter::select_first(&har, &UrlFilter::new(filter))?;
    if let Some(started) = entry.started_at() {
        tracing::debug!("Selected entry was recorded at {}", started);
    }

    let replayer = Replayer::new(config)?;
    let response = replayer.replay(&entry.request).await?;

    let body = response.pretty_body();
    writeln!(out, "{}", body)?;
    out.flush()?;

    Ok(())
}
