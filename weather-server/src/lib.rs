//! HTTP surface of the weather dashboard backend.
//!
//! Routes map query parameters onto [`weather_core::RequestProxy`] calls and
//! render its errors as JSON.

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::app_router;
pub use server::{ServerConfig, serve};
pub use state::AppState;
