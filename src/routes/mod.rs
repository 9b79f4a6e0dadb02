use axum::{routing::get, Router};

use crate::controllers::{games_controller, health_controller, standings_controller};
use crate::state::AppState;

/// Configura las rutas de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health_controller::root))
        .route("/api/standings", get(standings_controller::get_standings))
        .route("/api/games/recent", get(games_controller::get_recent_games))
}
