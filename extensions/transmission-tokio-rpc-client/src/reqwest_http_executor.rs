use std::time::Duration;
use transmission_rpc::constants::{DEFAULT_REQUEST_TIMEOUT, DEFAULT_USER_AGENT};
use transmission_rpc::rpc::{HeaderSet, HttpExecutor, HttpRequest, HttpResponse, TransportError};

/// `HttpExecutor` backed by a pooled `reqwest::Client`.
///
/// Every response is returned to the caller regardless of its status; only
/// connection, timeout and body read failures become a `TransportError`.
#[derive(Debug, Clone)]
pub struct ReqwestHttpExecutor {
    client: reqwest::Client,
}

impl ReqwestHttpExecutor {
    /// Creates an executor with the default timeout and user agent.
    pub fn new() -> Result<Self, TransportError> {
        Self::builder().build()
    }

    pub fn builder() -> ReqwestHttpExecutorBuilder {
        ReqwestHttpExecutorBuilder::default()
    }

    /// Wraps an already configured client, e.g. one with custom TLS roots.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestHttpExecutorBuilder {
    timeout: Duration,
    user_agent: String,
}

impl Default for ReqwestHttpExecutorBuilder {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ReqwestHttpExecutorBuilder {
    /// Total time allowed for one request, from connect to the end of the body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<ReqwestHttpExecutor, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(|e| TransportError::with_source("failed to build HTTP client", e))?;

        Ok(ReqwestHttpExecutor { client })
    }
}

#[async_trait::async_trait]
impl HttpExecutor for ReqwestHttpExecutor {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let HttpRequest { url, headers, body } = request;

        let mut builder = self.client.post(url.clone()).body(body);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::with_source(format!("POST {url} failed"), e))?;

        let status = response.status().as_u16();

        // Header values that are not visible ASCII cannot carry a session id.
        let headers: HeaderSet = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();

        let body = response.bytes().await.map_err(|e| {
            TransportError::with_source(format!("failed to read response body from {url}"), e)
        })?;

        tracing::trace!(%url, status, bytes = body.len(), "Received HTTP response");

        Ok(HttpResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}
