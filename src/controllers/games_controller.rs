//! Controlador de partidos
//!
//! Partidos de los tres días anteriores y posteriores a hoy.

use axum::{extract::State, response::Json};
use serde_json::Value;

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Obtener los partidos recientes
pub async fn get_recent_games(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    log::info!("🏀 Solicitud de partidos recientes recibida");

    match state.recent_games_service().get_recent_games().await {
        Ok(games) => Ok(Json(games)),
        Err(e) => {
            log::error!("❌ No se pudieron obtener los partidos recientes: {}", e);
            Err(e)
        }
    }
}
