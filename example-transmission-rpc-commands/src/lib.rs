pub mod session;
pub mod system;
pub mod torrent;

pub use session::{
    SessionGet, SessionGetArguments, SessionStats, SessionStatsArguments, session_stats,
};
pub use system::{
    FreeSpace, FreeSpaceArguments, PortTest, PortTestArguments, free_space, port_test,
};
pub use torrent::{TorrentGet, TorrentGetArguments, TorrentSummary, torrent_get};
