//! HTTP surface: realtime socket, REST lookups, static assets
//!
//! - GET /ws - WebSocket event surface (join, signal, recognized text,
//!   get summary)
//! - GET /rooms/:room/summary - retained summary lookup
//! - GET /health - health check
//! - anything else - static client assets

mod handlers;
mod routes;
mod state;
mod ws;

pub use routes::create_router;
pub use state::AppState;
