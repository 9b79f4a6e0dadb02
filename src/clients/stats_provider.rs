//! Contrato del proveedor de estadísticas
//!
//! Los servicios solo conocen este trait; el cliente HTTP real y los
//! proveedores falsos de los tests lo implementan.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;

use crate::models::StatsResponse;

/// Fallo al obtener datos del proveedor
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {status} for {endpoint}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Clasificación de la liga, tal cual la devuelve el proveedor
    async fn fetch_standings(&self) -> Result<Value, UpstreamError>;

    /// Marcador de un día concreto
    async fn fetch_scoreboard(&self, date: NaiveDate) -> Result<StatsResponse, UpstreamError>;
}
