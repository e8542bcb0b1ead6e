use http::{HeaderMap, StatusCode, header};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// What the live server answered to a replayed request
#[derive(Debug, Clone)]
pub struct ReplayResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ReplayResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parsed `Content-Type`, if present and well-formed
    pub fn content_type(&self) -> Option<mime::Mime> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
    }

    /// Body as JSON indented with four spaces.
    ///
    /// A body that is not JSON is returned as text, unchanged. JSON bodies
    /// are re-serialized from parsed values: object keys keep the server's
    /// order, but numbers print in serde_json's canonical form, so `1.0`
    /// stays `1.0` where a JavaScript `JSON.stringify` would print `1`.
    pub fn pretty_body(&self) -> String {
        if self.body.is_empty() {
            return String::new();
        }

        let value = match serde_json::from_slice::<serde_json::Value>(&self.body) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    "Response body is not JSON ({}), printing it as text: {}",
                    self.content_type()
                        .map(|m| m.essence_str().to_string())
                        .unwrap_or_else(|| "no content type".to_string()),
                    e
                );
                return self.text();
            }
        };

        let mut out = Vec::with_capacity(self.body.len() * 2);
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
        if let Err(e) = value.serialize(&mut serializer) {
            tracing::warn!("Could not format response body, printing it as text: {}", e);
            return self.text();
        }

        String::from_utf8_lossy(&out).into_owned()
    }

    fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
