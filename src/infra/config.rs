//! Centralized configuration (environment variables + defaults).

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8090";
pub const DEFAULT_API_URL: &str = "http://localhost:8090";

/// Loads `.env` if present. Safe to call more than once.
pub fn load_dotenv() {
    dotenv::dotenv().ok();
}

/// Address the API server listens on (`TABLEWARE_BIND_ADDR`, default `0.0.0.0:8090`).
///
/// An unparsable value falls back to the default with a warning.
pub fn bind_addr() -> SocketAddr {
    let default: SocketAddr = SocketAddr::from(([0, 0, 0, 0], 8090));
    match std::env::var("TABLEWARE_BIND_ADDR") {
        Ok(v) => v.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %v, "TABLEWARE_BIND_ADDR is not a socket address, using {}", DEFAULT_BIND_ADDR);
            default
        }),
        Err(_) => default,
    }
}

/// Snapshot file for the collection (`TABLEWARE_DATA_FILE`). Unset means in-memory only.
pub fn data_file() -> Option<PathBuf> {
    std::env::var("TABLEWARE_DATA_FILE")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Base URL the client talks to (`TABLEWARE_API_URL`, default `http://localhost:8090`).
pub fn api_url() -> String {
    std::env::var("TABLEWARE_API_URL")
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Installs the global `tracing` subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
