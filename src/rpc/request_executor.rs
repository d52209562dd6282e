use super::{
    CodecError, HeaderSet, HostConfiguration, HttpExecutor, HttpRequest, HttpResponse, RpcCodec,
    RpcRequest, TransportError,
};
use crate::constants::{CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;

/// Failures of a single request/response exchange.
///
/// The three variants are kept apart because callers react differently to
/// each: only `InvalidResponseStatus` is a session problem.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("invalid response status: expected {expected}, got {actual}")]
    InvalidResponseStatus { expected: u16, actual: u16 },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Couples an `HttpExecutor` with an `RpcCodec` and the configured host.
///
/// Sends encoded envelopes to the host, enforces the expected status and
/// decodes the body.
pub struct RequestExecutor<E, C> {
    configuration: Arc<HostConfiguration>,
    http_executor: E,
    codec: C,
}

impl<E, C> RequestExecutor<E, C>
where
    E: HttpExecutor,
    C: RpcCodec,
{
    pub fn new(configuration: Arc<HostConfiguration>, http_executor: E, codec: C) -> Self {
        Self {
            configuration,
            http_executor,
            codec,
        }
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn http_executor(&self) -> &E {
        &self.http_executor
    }

    /// Sends `request` with exactly the given headers and decodes the body as `R`.
    ///
    /// A response whose status differs from `expected_status` is reported as
    /// `InvalidResponseStatus` without looking at the body.
    pub async fn execute<T, R>(
        &self,
        request: &RpcRequest<T>,
        mut headers: HeaderSet,
        expected_status: u16,
    ) -> Result<R, RequestError>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        let body = self.codec.encode(request)?;
        headers.insert(CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string());

        let response = self
            .http_executor
            .post(HttpRequest {
                url: self.configuration.host().clone(),
                headers,
                body,
            })
            .await?;

        if response.status != expected_status {
            return Err(RequestError::InvalidResponseStatus {
                expected: expected_status,
                actual: response.status,
            });
        }

        Ok(self.codec.decode(&response.body)?)
    }

    /// Sends an empty-bodied POST to the host and returns the raw response,
    /// whatever its status.
    pub async fn post_bare(&self, headers: HeaderSet) -> Result<HttpResponse, TransportError> {
        self.http_executor
            .post(HttpRequest {
                url: self.configuration.host().clone(),
                headers,
                body: Vec::new(),
            })
            .await
    }
}
