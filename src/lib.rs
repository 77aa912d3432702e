pub mod app;
pub mod client;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::tableware_service::TablewareService;
pub use client::{ClientError, Outcome, TablewareClient};
pub use domain::{Lookup, Tableware};
