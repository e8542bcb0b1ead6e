use crate::har::{Entry, Har};

/// Selects entries by a literal substring of their request URL.
///
/// Matching is case-sensitive and not URL-aware: the substring may span the
/// host, path and query. An empty substring matches every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlFilter {
    substring: String,
}

impl UrlFilter {
    pub fn new(substring: impl Into<String>) -> Self {
        Self {
            substring: substring.into(),
        }
    }

    pub fn substring(&self) -> &str {
        &self.substring
    }

    /// Check if an entry's request URL contains the substring
    pub fn matches(&self, entry: &Entry) -> bool {
        entry.request.url.contains(self.substring.as_str())
    }
}

/// Matching entries, in archive order
pub fn filter_entries<'a>(entries: &'a [Entry], filter: &UrlFilter) -> Vec<&'a Entry> {
    entries.iter().filter(|entry| filter.matches(entry)).collect()
}

/// The first matching entry in archive order.
///
/// Returns an error if no entry matches the filter.
pub fn select_first<'a>(har: &'a Har, filter: &UrlFilter) -> crate::Result<&'a Entry> {
    let entry = har
        .log
        .entries
        .iter()
        .find(|entry| filter.matches(entry))
        .ok_or_else(|| crate::Error::NoMatchingEntry(filter.substring().to_string()))?;

    tracing::debug!(
        "Selected {} {} for filter {:?}",
        entry.request.method,
        entry.request.url,
        filter.substring()
    );

    Ok(entry)
}
