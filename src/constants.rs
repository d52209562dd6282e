use std::time::Duration;

// Header related constants

/// Header carrying the server-issued session token. Every request after a
/// bootstrap must echo the most recently received value.
pub const SESSION_ID_HEADER: &str = "X-Transmission-Session-Id";

/// Header carrying HTTP basic credentials.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

pub const JSON_CONTENT_TYPE: &str = "application/json";

// Envelope related constants

/// The only HTTP status accepted for an RPC exchange. Anything else is treated
/// as a session invalidation signal.
pub const STATUS_OK: u16 = 200;

/// Status the daemon uses to reject a missing or expired session token.
pub const STATUS_CONFLICT: u16 = 409;

/// Value of the `result` field for a successful command. Compared exactly.
pub const RESULT_SUCCESS: &str = "success";

// Transport defaults

/// Path the daemon serves its RPC endpoint on.
pub const DEFAULT_RPC_PATH: &str = "/transmission/rpc";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_USER_AGENT: &str = concat!("transmission-rpc/", env!("CARGO_PKG_VERSION"));
