mod host_configuration;
mod http_executor;
mod request_executor;
mod rpc_client;
mod rpc_codec;
mod rpc_command;
mod rpc_error;
mod rpc_request_response;
mod rpc_session_store;

pub use host_configuration::HostConfiguration;
pub use http_executor::{HeaderSet, HttpExecutor, HttpRequest, HttpResponse, TransportError};
pub use request_executor::{RequestError, RequestExecutor};
pub use rpc_client::RpcClient;
pub use rpc_codec::{CodecError, JsonCodec, RpcCodec};
pub use rpc_command::{RpcCommand, TypedRpcCommand};
pub use rpc_error::RpcError;
pub use rpc_request_response::{RpcRequest, RpcResponse};
pub use rpc_session_store::RpcSessionStore;
