//! NBA Today Dashboard API
//!
//! Backend que hace de proxy a las estadísticas de la NBA (clasificación y
//! partidos recientes) con un cache en memoria de corta duración.

pub mod cache;
pub mod clients;
pub mod config;
pub mod controllers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_middleware_with_origins;
use state::AppState;

/// Construir la aplicación completa a partir del estado
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware_with_origins(&state.config.cors_origins);

    routes::create_api_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
