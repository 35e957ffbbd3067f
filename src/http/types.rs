//! Request and response values exchanged with an `HttpExecutor`

use std::fmt;

use bytes::{Bytes, BytesMut};
use futures::stream::{self, BoxStream};
use futures::StreamExt;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::error::TransportError;

/// HTTP method of an outgoing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Head,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Head => f.write_str("HEAD"),
        }
    }
}

/// A request the adapter wants executed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRequest {
    pub method: Method,
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<(String, String)>,
}

impl SiteRequest {
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    #[must_use]
    pub fn head(url: impl Into<String>) -> Self {
        Self::new(Method::Head, url)
    }

    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Response payload, either already in memory or still on the wire
pub enum ResponseBody {
    Buffered(Bytes),
    /// One-shot stream; reading it consumes it
    Streaming(BoxStream<'static, Result<Bytes, TransportError>>),
}

/// Outcome of draining a body: everything that arrived, plus the error that
/// cut it short, if any
pub struct DrainedBody {
    pub bytes: Bytes,
    pub error: Option<TransportError>,
}

impl ResponseBody {
    #[must_use]
    pub fn empty() -> Self {
        Self::Buffered(Bytes::new())
    }

    #[must_use]
    pub fn is_buffered(&self) -> bool {
        matches!(self, Self::Buffered(_))
    }

    /// Read the body to the end without losing a partial prefix on error
    pub async fn drain(self) -> DrainedBody {
        match self {
            Self::Buffered(bytes) => DrainedBody { bytes, error: None },
            Self::Streaming(mut stream) => {
                let mut buffer = BytesMut::new();
                while let Some(chunk) = stream.next().await {
                    match chunk {
                        Ok(chunk) => buffer.extend_from_slice(&chunk),
                        Err(e) => {
                            return DrainedBody {
                                bytes: buffer.freeze(),
                                error: Some(e),
                            };
                        }
                    }
                }
                DrainedBody {
                    bytes: buffer.freeze(),
                    error: None,
                }
            }
        }
    }

    /// Read the whole body into memory
    pub async fn bytes(self) -> Result<Bytes, TransportError> {
        let drained = self.drain().await;
        match drained.error {
            Some(e) => Err(e),
            None => Ok(drained.bytes),
        }
    }
}

impl DrainedBody {
    /// Rebuild a body that replays exactly what the original produced,
    /// including a trailing read error.
    #[must_use]
    pub fn into_body(self) -> ResponseBody {
        match self.error {
            None => ResponseBody::Buffered(self.bytes),
            Some(e) => ResponseBody::Streaming(
                stream::iter(vec![Ok(self.bytes), Err(e)]).boxed(),
            ),
        }
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffered(bytes) => f.debug_tuple("Buffered").field(&bytes.len()).finish(),
            Self::Streaming(_) => f.write_str("Streaming(..)"),
        }
    }
}

/// A response returned by an `HttpExecutor`
#[derive(Debug)]
pub struct SiteResponse {
    /// Final URL after redirects
    pub url: String,
    pub status: u16,
    pub headers: HeaderMap,
    pub body: ResponseBody,
}

impl SiteResponse {
    /// Response with an in-memory body and the given content type
    #[must_use]
    pub fn buffered(
        url: impl Into<String>,
        status: u16,
        content_type: Option<&str>,
        body: impl Into<Bytes>,
    ) -> Self {
        let mut headers = HeaderMap::new();
        if let Some(value) = content_type.and_then(|ct| HeaderValue::from_str(ct).ok()) {
            headers.insert(CONTENT_TYPE, value);
        }
        Self {
            url: url.into(),
            status,
            headers,
            body: ResponseBody::Buffered(body.into()),
        }
    }

    /// Shorthand for a `200 text/html` response
    #[must_use]
    pub fn html(url: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self::buffered(url, 200, Some("text/html; charset=UTF-8"), body)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Declared `Content-Type`, if present and readable
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE)?.to_str().ok()
    }

    /// Declared `Content-Length`, if present and numeric
    #[must_use]
    pub fn content_length(&self) -> Option<u64> {
        self.headers
            .get(CONTENT_LENGTH)?
            .to_str()
            .ok()?
            .trim()
            .parse()
            .ok()
    }

    /// Whether the declared content kind is HTML or any `text/*` type
    #[must_use]
    pub fn is_textual(&self) -> bool {
        self.content_type().is_some_and(is_textual_content_type)
    }

    /// Read the body and decode it as UTF-8, replacing invalid sequences
    pub async fn text(self) -> Result<String, TransportError> {
        let bytes = self.body.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// `text/*` or any media type whose subtype mentions html
#[must_use]
pub fn is_textual_content_type(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or("").trim();
    let (kind, subtype) = essence.split_once('/').unwrap_or((essence, ""));
    kind.eq_ignore_ascii_case("text") || subtype.to_ascii_lowercase().contains("html")
}
