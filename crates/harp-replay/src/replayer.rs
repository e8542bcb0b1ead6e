use crate::client::{ReplayConfig, build_client};
use crate::error::TransportErrorKind;
use crate::{Error, ReplayResponse, Result};
use harp_core::har::{Method, Request};
use harp_core::headers::ReplayHeaders;
use http::header::{CONTENT_LENGTH, TRANSFER_ENCODING};
use http::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use url::Url;

/// Issues recorded requests against the live server, one call per request
#[derive(Debug, Clone)]
pub struct Replayer {
    client: Client,
}

impl Replayer {
    pub fn new(config: &ReplayConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
        })
    }

    /// Outbound request with the recorded method, URL and replayable headers.
    ///
    /// The recorded body, query string and cookies are not added: the query
    /// is already part of the URL and cookies travel in the `cookie` header.
    pub fn build_request(&self, request: &Request) -> Result<reqwest::Request> {
        let url = Url::parse(&request.url).map_err(|source| Error::InvalidUrl {
            url: request.url.clone(),
            source,
        })?;
        let headers = header_map(&ReplayHeaders::from_recorded(&request.headers))?;

        self.client
            .request(http_method(request.method), url)
            .headers(headers)
            .build()
            .map_err(|source| Error::Request {
                url: request.url.clone(),
                source,
            })
    }

    /// Replay `request` once and collect the whole response.
    ///
    /// Non-success statuses are returned like any other response.
    pub async fn replay(&self, request: &Request) -> Result<ReplayResponse> {
        let outbound = self.build_request(request)?;
        tracing::info!("Replay: {}: {}", request.method, request.url);
        tracing::debug!("Sending {} headers", outbound.headers().len());

        let transport = |source: reqwest::Error| Error::Transport {
            url: request.url.clone(),
            kind: TransportErrorKind::of(&source),
            source,
        };

        let response = self.client.execute(outbound).await.map_err(transport)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(transport)?.to_vec();

        if status.is_success() {
            tracing::debug!("{} answered {} with {} bytes", request.url, status, body.len());
        } else {
            tracing::warn!("{} answered {}", request.url, status);
        }

        Ok(ReplayResponse {
            status,
            headers,
            body,
        })
    }
}

/// HTTP method for a recorded method, verbatim
pub fn http_method(method: Method) -> http::Method {
    match method {
        Method::Get => http::Method::GET,
        Method::Post => http::Method::POST,
        Method::Put => http::Method::PUT,
        Method::Delete => http::Method::DELETE,
        Method::Patch => http::Method::PATCH,
    }
}

/// Wire header map for the converted headers.
///
/// HTTP header names are case-insensitive, so names that differ only in case
/// collapse to the last one. The recorded body is never sent, so its framing
/// headers (`content-length`, `transfer-encoding`) are left out as well.
pub fn header_map(headers: &ReplayHeaders) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers.iter() {
        let invalid = || Error::InvalidHeader {
            name: name.to_string(),
        };
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        if header_name == CONTENT_LENGTH || header_name == TRANSFER_ENCODING {
            tracing::debug!("Not replaying body framing header {}", name);
            continue;
        }
        let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}
