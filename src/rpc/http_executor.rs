use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::sync::Arc;
use url::Url;

/// A set of HTTP headers keyed by name.
///
/// Keys are unique; insertion order carries no meaning.
pub type HeaderSet = BTreeMap<String, String>;

/// A fully materialized HTTP POST.
///
/// Every request carries its own header set so that no transport-wide header
/// state has to be mutated between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: Url,
    pub headers: HeaderSet,
    pub body: Vec<u8>,
}

/// A fully buffered HTTP response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderSet,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Looks up a response header, ignoring ASCII case in the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A connectivity or I/O level failure raised by an `HttpExecutor`.
///
/// This never represents an HTTP status problem; a response with any status
/// code is a successful exchange from the executor's point of view.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The pluggable HTTP transport.
///
/// Implementations own connection pooling, TLS, redirects and timeouts. They
/// must return every response regardless of its status code and only fail
/// with a `TransportError` when no response could be obtained.
#[async_trait::async_trait]
pub trait HttpExecutor: Send + Sync {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait::async_trait]
impl<E> HttpExecutor for Arc<E>
where
    E: HttpExecutor + ?Sized,
{
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).post(request).await
    }
}
