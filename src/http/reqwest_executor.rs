//! Production `HttpExecutor` backed by an async reqwest client

use std::time::Duration;

use futures::future::BoxFuture;
use futures::StreamExt;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, REFERER};

use super::types::{Method, ResponseBody, SiteRequest, SiteResponse};
use super::HttpExecutor;
use crate::config::SiteConfig;
use crate::error::{SourceError, SourceResult, TransportError};

/// reqwest-backed executor; bodies are handed out as streams
#[derive(Clone)]
pub struct ReqwestExecutor {
    client: Client,
}

impl ReqwestExecutor {
    /// Build a client carrying the site's user agent, timeout and `Referer`
    pub fn new(config: &SiteConfig) -> SourceResult<Self> {
        let mut headers = HeaderMap::new();
        let referer = HeaderValue::from_str(&config.referer())
            .map_err(|e| SourceError::Config(format!("invalid referer header: {e}")))?;
        headers.insert(REFERER, referer);

        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .default_headers(headers)
            .build()
            .map_err(|e| SourceError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl HttpExecutor for ReqwestExecutor {
    fn execute(&self, request: SiteRequest) -> BoxFuture<'_, Result<SiteResponse, TransportError>> {
        Box::pin(async move {
            let mut builder = match request.method {
                Method::Get => self.client.get(&request.url),
                Method::Head => self.client.head(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            log::debug!(target: "oceanwp::http", "{} {}", request.method, request.url);

            let response = builder.send().await.map_err(|e| TransportError::Request {
                url: request.url.clone(),
                message: e.to_string(),
            })?;

            let status = response.status().as_u16();
            let headers = response.headers().clone();
            let url = response.url().to_string();

            let body_url = url.clone();
            let stream = response.bytes_stream().map(move |chunk| {
                chunk.map_err(|e| TransportError::Body {
                    url: body_url.clone(),
                    message: e.to_string(),
                })
            });

            Ok(SiteResponse {
                url,
                status,
                headers,
                body: ResponseBody::Streaming(stream.boxed()),
            })
        })
    }
}
