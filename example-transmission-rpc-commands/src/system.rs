use serde::{Deserialize, Serialize};
use transmission_rpc::rpc::TypedRpcCommand;
use transmission_rpc::utils::next_tag;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PortTestRequest {}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PortTestArguments {
    pub port_is_open: bool,
}

/// `port-test`: asks the daemon whether its peer port is reachable.
pub type PortTest = TypedRpcCommand<PortTestRequest, PortTestArguments>;

pub fn port_test() -> PortTest {
    TypedRpcCommand::new("port-test", PortTestRequest {}, next_tag())
}

#[derive(Debug, Clone, Serialize)]
pub struct FreeSpaceRequest {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FreeSpaceArguments {
    pub path: String,
    pub size_bytes: i64,
    #[serde(default, rename = "total_size")]
    pub total_size: Option<i64>,
}

/// `free-space`: reports the space available under a directory on the daemon host.
pub type FreeSpace = TypedRpcCommand<FreeSpaceRequest, FreeSpaceArguments>;

pub fn free_space(path: impl Into<String>) -> FreeSpace {
    TypedRpcCommand::new(
        "free-space",
        FreeSpaceRequest { path: path.into() },
        next_tag(),
    )
}
