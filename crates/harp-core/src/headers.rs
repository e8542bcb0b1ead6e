//! Conversion of recorded request headers into the set sent on replay.

use crate::har::NameValue;
use indexmap::IndexMap;

/// Recorded name that is never replayed, so the HTTP client can negotiate
/// and decode compression itself.
pub const ACCEPT_ENCODING: &str = "accept-encoding";

/// Header name to value mapping built from a recorded header list.
///
/// Keys keep the position of their first occurrence; a later header with the
/// same name replaces the value. Names are compared exactly as recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayHeaders {
    entries: IndexMap<String, String>,
}

impl ReplayHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the mapping from recorded headers, skipping the ones that must
    /// not be replayed
    pub fn from_recorded(headers: &[NameValue]) -> Self {
        let mut mapping = Self::new();
        for header in headers {
            if is_replayable(&header.name) {
                mapping.insert(&header.name, &header.value);
            } else {
                tracing::debug!("Dropping recorded header {}", header.name);
            }
        }
        mapping
    }

    /// Set `name` to `value`, replacing any earlier value
    pub fn insert(&mut self, name: &str, value: &str) {
        // IndexMap::insert keeps the existing slot for a known key
        self.entries.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// HTTP/2 pseudo-headers (`:authority`, `:path`, ...) and `accept-encoding`
/// are not replayed
pub fn is_replayable(name: &str) -> bool {
    !name.starts_with(':') && name != ACCEPT_ENCODING
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded(pairs: &[(&str, &str)]) -> Vec<NameValue> {
        pairs.iter().map(|(n, v)| NameValue::new(*n, *v)).collect()
    }

    #[test]
    fn test_drops_pseudo_headers_and_accept_encoding() {
        let headers = ReplayHeaders::from_recorded(&recorded(&[
            (":method", "GET"),
            (":authority", "x.test"),
            (":path", "/api"),
            ("accept-encoding", "gzip, br"),
            ("accept", "application/json"),
            ("x-trace", "abc"),
        ]));

        assert_eq!(headers.len(), 2);
        assert!(headers.iter().all(|(n, _)| !n.starts_with(':')));
        assert!(!headers.contains_key("accept-encoding"));
        assert_eq!(headers.get("accept"), Some("application/json"));
        assert_eq!(headers.get("x-trace"), Some("abc"));
    }

    #[test]
    fn test_accept_encoding_match_is_case_sensitive() {
        let headers = ReplayHeaders::from_recorded(&recorded(&[
            ("Accept-Encoding", "gzip"),
            ("accept-encoding", "br"),
        ]));

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("Accept-Encoding"), Some("gzip"));
    }

    #[test]
    fn test_colon_only_dropped_as_prefix() {
        let headers = ReplayHeaders::from_recorded(&recorded(&[("x-port:", "8080")]));
        assert_eq!(headers.get("x-port:"), Some("8080"));
    }

    #[test]
    fn test_last_write_wins_on_collision() {
        let headers = ReplayHeaders::from_recorded(&recorded(&[
            ("cookie", "a=1"),
            ("accept", "*/*"),
            ("cookie", "b=2"),
        ]));

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("cookie"), Some("b=2"));

        // First occurrence keeps its position
        let names: Vec<&str> = headers.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["cookie", "accept"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut headers = ReplayHeaders::new();
        headers.insert("a", "1");
        headers.insert("b", "2");
        headers.insert("c", "3");
        headers.insert("a", "4");

        let pairs: Vec<(&str, &str)> = headers.iter().collect();
        assert_eq!(pairs, [("a", "4"), ("b", "2"), ("c", "3")]);
    }

    #[test]
    fn test_no_case_or_whitespace_normalization() {
        let headers = ReplayHeaders::from_recorded(&recorded(&[
            ("X-Token", " padded "),
            ("x-token", "lower"),
        ]));

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("X-Token"), Some(" padded "));
        assert_eq!(headers.get("x-token"), Some("lower"));
    }

    #[test]
    fn test_empty_input() {
        assert!(ReplayHeaders::from_recorded(&[]).is_empty());
    }
}
