use super::{CodecError, RequestError, TransportError};

/// Represents every failure an `RpcClient` call can surface.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// A connectivity or I/O error occurred while sending the request.
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    /// The server answered with a status other than the expected one.
    /// On a first attempt this triggers a session bootstrap.
    #[error("invalid response status: expected {expected}, got {actual}")]
    InvalidResponseStatus { expected: u16, actual: u16 },

    /// The response tag does not match the tag of the command that was sent.
    #[error("invalid response tag: expected {expected}, got {actual}")]
    TagMismatch { expected: u32, actual: u32 },

    /// The server executed the method and reported a failure in `result`.
    /// The command has already received the response.
    #[error("rpc command `{method}` (tag {tag}) failed: {result}")]
    CommandFailed {
        method: String,
        tag: u32,
        result: String,
    },

    /// The request could not be encoded or the response could not be decoded.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// The bare request used to obtain a session token failed.
    #[error("session bootstrap failed: {0}")]
    Bootstrap(#[source] TransportError),

    /// The bootstrap response did not carry a session token.
    #[error("session bootstrap response is missing the `{header}` header")]
    MissingSessionId { header: &'static str },

    /// The call completed but the command holds no response.
    #[error("rpc command completed without a response")]
    MissingResponse,

    /// The single retry after a session bootstrap failed.
    #[error("rpc call failed after session refresh: {0}")]
    RetryFailed(#[source] Box<RpcError>),
}

impl RpcError {
    /// Returns `true` for the status signal that a session bootstrap can heal.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RpcError::InvalidResponseStatus { .. })
    }

    /// Unwraps `RetryFailed` layers, returning the error that caused the failure.
    pub fn root(&self) -> &RpcError {
        match self {
            RpcError::RetryFailed(inner) => inner.root(),
            other => other,
        }
    }
}

impl From<RequestError> for RpcError {
    fn from(e: RequestError) -> Self {
        match e {
            RequestError::InvalidResponseStatus { expected, actual } => {
                RpcError::InvalidResponseStatus { expected, actual }
            }
            RequestError::Transport(e) => RpcError::Transport(e),
            RequestError::Codec(e) => RpcError::Codec(e),
        }
    }
}
