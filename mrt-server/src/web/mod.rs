//! Web layer for the station directory.
//!
//! Exposes the directory queries as JSON endpoints.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
