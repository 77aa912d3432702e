pub mod router;
pub mod types;
pub mod handlers {
    pub mod health;
    pub mod search;
    pub mod tableware;
}

pub use router::{create_router, ApiDoc, API_BASE};
pub use types::AppState;
