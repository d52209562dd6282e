use super::{RpcRequest, RpcResponse};
use serde::{Serialize, de::DeserializeOwned};

/// A typed unit of work for one RPC method.
///
/// A command knows how to build its request, which shape its response
/// arguments decode into, and which tag the response must carry. `RpcClient`
/// hands the decoded response back through `set_response`, so a command is
/// borrowed mutably for the duration of a single call.
pub trait RpcCommand: Send {
    /// Request payload sent in the `arguments` field.
    type Arguments: Serialize + Send + Sync;

    /// Shape the response `arguments` field is decoded into.
    type Response: DeserializeOwned + Send;

    fn method(&self) -> &str;

    /// Correlation tag the response must echo.
    fn tag(&self) -> u32;

    fn build_request(&self) -> RpcRequest<Self::Arguments>;

    /// Receives the decoded response. Invoked at most once per successful decode.
    fn set_response(&mut self, response: RpcResponse<Self::Response>);

    fn response(&self) -> Option<&RpcResponse<Self::Response>>;

    /// The `result` string of the received response, if any.
    fn result(&self) -> Option<&str> {
        self.response().map(|response| response.result.as_str())
    }
}

/// A ready-made `RpcCommand` for methods that need no custom behavior.
///
/// `T` is the request payload and `V` the response arguments.
#[derive(Debug, Clone)]
pub struct TypedRpcCommand<T, V> {
    method: String,
    arguments: T,
    tag: u32,
    response: Option<RpcResponse<V>>,
}

impl<T, V> TypedRpcCommand<T, V> {
    pub fn new(method: impl Into<String>, arguments: T, tag: u32) -> Self {
        Self {
            method: method.into(),
            arguments,
            tag,
            response: None,
        }
    }

    pub fn arguments(&self) -> &T {
        &self.arguments
    }

    /// Consumes the command, returning its response if one was received.
    pub fn into_response(self) -> Option<RpcResponse<V>> {
        self.response
    }
}

impl<T, V> RpcCommand for TypedRpcCommand<T, V>
where
    T: Serialize + Clone + Send + Sync,
    V: DeserializeOwned + Send,
{
    type Arguments = T;
    type Response = V;

    fn method(&self) -> &str {
        &self.method
    }

    fn tag(&self) -> u32 {
        self.tag
    }

    fn build_request(&self) -> RpcRequest<T> {
        RpcRequest::new(self.method.clone(), self.arguments.clone(), self.tag)
    }

    fn set_response(&mut self, response: RpcResponse<V>) {
        self.response = Some(response);
    }

    fn response(&self) -> Option<&RpcResponse<V>> {
        self.response.as_ref()
    }
}
