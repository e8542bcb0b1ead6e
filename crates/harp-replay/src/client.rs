use crate::{Error, Result};
use reqwest::Client;
use std::time::Duration;

/// Replay timeout applied when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client settings for a replay run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayConfig {
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ReplayConfig {
    /// Config from a timeout in seconds, where 0 disables the timeout
    pub fn with_timeout_secs(secs: u64) -> Self {
        Self {
            timeout: (secs > 0).then(|| Duration::from_secs(secs)),
        }
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

pub fn build_client(config: &ReplayConfig) -> Result<Client> {
    let mut builder = Client::builder().use_rustls_tls();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    tracing::debug!("Building HTTP client with timeout {:?}", config.timeout);
    builder.build().map_err(Error::Client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        assert_eq!(ReplayConfig::default().timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_zero_disables_timeout() {
        assert_eq!(ReplayConfig::with_timeout_secs(0).timeout, None);
        assert_eq!(
            ReplayConfig::with_timeout_secs(5).timeout,
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn test_build_client() {
        assert!(build_client(&ReplayConfig::default()).is_ok());
        assert!(build_client(&ReplayConfig::with_timeout_secs(0)).is_ok());
    }
}
