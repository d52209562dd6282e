use example_transmission_rpc_commands::{SessionGet, session_stats, torrent_get};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use transmission_rpc::rpc::{HostConfiguration, RpcCommand};
use transmission_tokio_rpc_client::rpc_client;
use url::Url;

/// Where the daemon is reached when `TRANSMISSION_RPC_URL` is not set.
const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9091/transmission/rpc";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let url =
        std::env::var("TRANSMISSION_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
    let host = match Url::parse(&url) {
        Ok(host) => host,
        Err(e) => {
            tracing::error!(%url, error = %e, "Invalid RPC URL");
            return ExitCode::FAILURE;
        }
    };

    let mut configuration = HostConfiguration::new(host);
    if let (Ok(username), Ok(password)) = (
        std::env::var("TRANSMISSION_USERNAME"),
        std::env::var("TRANSMISSION_PASSWORD"),
    ) {
        configuration = configuration.with_credentials(username, password);
    }

    let client = match rpc_client(configuration) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build RPC client");
            return ExitCode::FAILURE;
        }
    };

    // The first call bootstraps the session; the others reuse it.
    let mut session = SessionGet::new();
    if let Err(e) = client.execute_with_session(&mut session).await {
        tracing::error!(error = %e, "session-get failed");
        return ExitCode::FAILURE;
    }
    if let Some(arguments) = session.arguments() {
        println!(
            "Daemon version: {:?}, RPC version: {:?}",
            arguments.version, arguments.rpc_version
        );
    }

    let mut stats = session_stats();
    match client.execute_with_session(&mut stats).await {
        Ok(()) => println!("Session stats: {:?}", stats.response().map(|r| &r.arguments)),
        Err(e) => tracing::warn!(error = %e, "session-stats failed"),
    }

    let mut torrents = torrent_get(&[], None);
    match client.execute_with_session(&mut torrents).await {
        Ok(()) => {
            for torrent in torrents
                .response()
                .map(|r| r.arguments.torrents.as_slice())
                .unwrap_or_default()
            {
                println!(
                    "{:>5} {:<40} {:>6.1}%",
                    torrent.id.unwrap_or_default(),
                    torrent.name.as_deref().unwrap_or("?"),
                    torrent.percent_done.unwrap_or_default() * 100.0
                );
            }
        }
        Err(e) => tracing::warn!(error = %e, "torrent-get failed"),
    }

    ExitCode::SUCCESS
}
