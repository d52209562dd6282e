use crate::ReqwestHttpExecutor;
use transmission_rpc::constants::DEFAULT_RPC_PATH;
use transmission_rpc::rpc::{HostConfiguration, TransportError};
use url::Url;

/// An `RpcClient` speaking JSON over `reqwest`.
pub type RpcClient = transmission_rpc::rpc::RpcClient<ReqwestHttpExecutor>;

/// Builds a client for `configuration` with a default `ReqwestHttpExecutor`.
pub fn rpc_client(configuration: HostConfiguration) -> Result<RpcClient, TransportError> {
    Ok(RpcClient::new(configuration, ReqwestHttpExecutor::new()?))
}

/// The daemon's RPC URL for a plain HTTP host and port.
pub fn rpc_endpoint(host: &str, port: u16) -> Result<Url, url::ParseError> {
    let mut url = Url::parse("http://localhost")?;
    url.set_host(Some(host))?;
    // Only fails for cannot-be-a-base URLs, which an http URL never is.
    let _ = url.set_port(Some(port));
    url.set_path(DEFAULT_RPC_PATH);
    Ok(url)
}
