use super::handlers;
use super::state::AppState;
use super::ws;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Create the HTTP router with all routes
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Realtime event surface (join/signal/recognized text/get summary)
        .route("/ws", get(ws::ws_handler))
        // Summary retrieval outside the socket
        .route("/rooms/:room/summary", get(handlers::get_room_summary))
        // Client assets
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
