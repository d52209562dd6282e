use serde::{Deserialize, Serialize};
use transmission_rpc::rpc::TypedRpcCommand;
use transmission_rpc::utils::next_tag;

#[derive(Debug, Clone, Serialize)]
pub struct TorrentGetRequest {
    pub fields: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<i64>>,
}

/// A subset of the per-torrent fields the daemon can report.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TorrentSummary {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub percent_done: Option<f64>,
    pub rate_download: Option<i64>,
    pub rate_upload: Option<i64>,
    pub status: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TorrentGetArguments {
    #[serde(default)]
    pub torrents: Vec<TorrentSummary>,
}

pub type TorrentGet = TypedRpcCommand<TorrentGetRequest, TorrentGetArguments>;

/// Fields requested when the caller passes none.
pub const DEFAULT_TORRENT_FIELDS: &[&str] = &[
    "id",
    "name",
    "percentDone",
    "rateDownload",
    "rateUpload",
    "status",
];

/// `torrent-get` for the given ids, or for every torrent when `ids` is `None`.
pub fn torrent_get(fields: &[&str], ids: Option<Vec<i64>>) -> TorrentGet {
    let fields = if fields.is_empty() {
        DEFAULT_TORRENT_FIELDS
    } else {
        fields
    };

    TypedRpcCommand::new(
        "torrent-get",
        TorrentGetRequest {
            fields: fields.iter().map(|field| field.to_string()).collect(),
            ids,
        },
        next_tag(),
    )
}
