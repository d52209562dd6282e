mod reqwest_http_executor;
mod rpc_client;

pub use reqwest_http_executor::{ReqwestHttpExecutor, ReqwestHttpExecutorBuilder};
pub use rpc_client::{RpcClient, rpc_client, rpc_endpoint};
