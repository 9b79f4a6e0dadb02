use axum::response::Json;
use serde_json::{json, Value};

/// Mensaje de vida del servicio
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "NBA Today Dashboard API" }))
}
