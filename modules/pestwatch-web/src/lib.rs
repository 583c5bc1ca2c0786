pub mod components;
pub mod disqus;
pub mod routes;
pub mod templates;

pub use routes::{build_router, AppState};
