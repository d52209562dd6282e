use crate::constants::RESULT_SUCCESS;
use serde::{Deserialize, Serialize};

/// The outbound RPC envelope.
///
/// Serialized as `{"method": ..., "arguments": ..., "tag": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest<T> {
    /// Name of the remote method, e.g. `torrent-get`.
    pub method: String,

    /// Method specific payload.
    pub arguments: T,

    /// Correlation identifier echoed back by the server in the response.
    pub tag: u32,
}

impl<T> RpcRequest<T> {
    pub fn new(method: impl Into<String>, arguments: T, tag: u32) -> Self {
        Self {
            method: method.into(),
            arguments,
            tag,
        }
    }
}

/// The inbound RPC envelope.
///
/// The `arguments` field is optional on the wire; when it is absent it decodes
/// to the type's default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse<V> {
    /// `"success"` or a human readable error description.
    pub result: String,

    #[serde(default)]
    pub arguments: V,

    pub tag: u32,
}

impl<V> RpcResponse<V> {
    pub fn is_success(&self) -> bool {
        self.result == RESULT_SUCCESS
    }

    /// Swaps the argument payload while keeping `result` and `tag`.
    pub fn with_arguments<U>(self, arguments: U) -> RpcResponse<U> {
        RpcResponse {
            result: self.result,
            arguments,
            tag: self.tag,
        }
    }
}
