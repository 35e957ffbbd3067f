//! HTTP seam between the adapter and the transport
//!
//! The adapter never talks to a client library directly. Everything goes
//! through `HttpExecutor`, which lets the category interceptor wrap the
//! transport and lets tests substitute scripted responses.

pub mod interceptor;
pub mod reqwest_executor;
pub mod types;

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::TransportError;

pub use interceptor::CategoryInterceptor;
pub use reqwest_executor::ReqwestExecutor;
pub use types::{
    DrainedBody, Method, ResponseBody, SiteRequest, SiteResponse, is_textual_content_type,
};

/// Executes one request and returns the response, whatever its status.
///
/// Non-success statuses are responses, not errors; only failures to get a
/// response at all are reported as `TransportError`.
pub trait HttpExecutor: Send + Sync {
    fn execute(&self, request: SiteRequest) -> BoxFuture<'_, Result<SiteResponse, TransportError>>;
}

impl<T: HttpExecutor + ?Sized> HttpExecutor for Arc<T> {
    fn execute(&self, request: SiteRequest) -> BoxFuture<'_, Result<SiteResponse, TransportError>> {
        (**self).execute(request)
    }
}

impl<T: HttpExecutor + ?Sized> HttpExecutor for Box<T> {
    fn execute(&self, request: SiteRequest) -> BoxFuture<'_, Result<SiteResponse, TransportError>> {
        (**self).execute(request)
    }
}
