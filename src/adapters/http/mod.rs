//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own module with DTOs, handlers and routes. The
//! modules share one [`AppState`] and one [`ApiError`] response shape.

pub mod error;
pub mod form;
pub mod router;
pub mod state;
pub mod submission;
pub mod voice;

pub use error::{ApiError, ErrorResponse};
pub use router::{api_router, health_check, with_web_client, HealthResponse};
pub use state::AppState;
