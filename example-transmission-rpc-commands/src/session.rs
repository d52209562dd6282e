use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use transmission_rpc::rpc::{RpcCommand, RpcRequest, RpcResponse, TypedRpcCommand};
use transmission_rpc::utils::next_tag;

/// Daemon settings returned by `session-get`. Only a subset of the fields is
/// modeled; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SessionGetArguments {
    pub version: Option<String>,
    pub rpc_version: Option<u32>,
    pub download_dir: Option<String>,
    pub peer_port: Option<u16>,
}

/// `session-get`, implemented by hand to show the full command contract.
#[derive(Debug)]
pub struct SessionGet {
    tag: u32,
    fields: Vec<String>,
    response: Option<RpcResponse<SessionGetArguments>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionGetRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl SessionGet {
    pub const METHOD: &'static str = "session-get";

    pub fn new() -> Self {
        Self::with_tag(next_tag())
    }

    pub fn with_tag(tag: u32) -> Self {
        Self {
            tag,
            fields: Vec::new(),
            response: None,
        }
    }

    /// Restricts the reply to the named fields.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn arguments(&self) -> Option<&SessionGetArguments> {
        self.response.as_ref().map(|response| &response.arguments)
    }
}

impl Default for SessionGet {
    fn default() -> Self {
        Self::new()
    }
}

impl RpcCommand for SessionGet {
    type Arguments = SessionGetRequest;
    type Response = SessionGetArguments;

    fn method(&self) -> &str {
        Self::METHOD
    }

    fn tag(&self) -> u32 {
        self.tag
    }

    fn build_request(&self) -> RpcRequest<SessionGetRequest> {
        RpcRequest::new(
            Self::METHOD,
            SessionGetRequest {
                fields: self.fields.clone(),
            },
            self.tag,
        )
    }

    fn set_response(&mut self, response: RpcResponse<SessionGetArguments>) {
        self.response = Some(response);
    }

    fn response(&self) -> Option<&RpcResponse<SessionGetArguments>> {
        self.response.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatsArguments {
    #[serde(default)]
    pub active_torrent_count: u32,
    #[serde(default)]
    pub paused_torrent_count: u32,
    #[serde(default)]
    pub torrent_count: u32,
    #[serde(default)]
    pub download_speed: u64,
    #[serde(default)]
    pub upload_speed: u64,
}

/// `session-stats` takes no arguments.
pub type SessionStats = TypedRpcCommand<Map<String, Value>, SessionStatsArguments>;

pub fn session_stats() -> SessionStats {
    TypedRpcCommand::new("session-stats", Map::new(), next_tag())
}
