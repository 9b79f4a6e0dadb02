//! Controlador de clasificación
//!
//! Expone la clasificación de la liga tal cual la devuelve el proveedor.

use axum::{extract::State, response::Json};
use serde_json::Value;

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Obtener la clasificación de la liga
pub async fn get_standings(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    log::info!("📊 Solicitud de clasificación recibida");

    let standings = state.standings_service().get_standings().await?;
    Ok(Json(standings))
}
