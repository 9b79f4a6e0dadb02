//! Modelos de partidos
//!
//! Registros por partido que devuelve `/api/games/recent`. Los nombres de
//! campo en JSON conservan las columnas del proveedor que consume el frontend.

use serde::{Deserialize, Serialize};

/// Línea de un equipo en un partido
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamLine {
    #[serde(rename = "TEAM_ID")]
    pub team_id: i64,
    #[serde(rename = "TEAM_ABBREVIATION")]
    pub abbreviation: String,
    #[serde(rename = "PTS")]
    pub points: Option<i64>,
    #[serde(rename = "WL")]
    pub win_loss_record: Option<String>,
}

/// Partido con sus dos equipos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(rename = "GAME_ID")]
    pub game_id: String,
    #[serde(rename = "GAME_DATE_EST")]
    pub date_iso: String,
    #[serde(rename = "GAME_STATUS_ID")]
    pub status_id: i64,
    #[serde(rename = "GAME_STATUS_TEXT")]
    pub status_text: String,
    #[serde(rename = "HOME_TEAM_ID")]
    pub home_team_id: Option<i64>,
    #[serde(rename = "VISITOR_TEAM_ID")]
    pub visitor_team_id: Option<i64>,
    pub home_team: Option<TeamLine>,
    pub visitor_team: Option<TeamLine>,
}

/// Cuerpo de respuesta de `/api/games/recent`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentGamesResponse {
    pub games: Vec<GameRecord>,
}

impl GameRecord {
    /// Orden del listado: fecha ascendente y, dentro de la fecha, estado ascendente
    pub fn sort_key(&self) -> (&str, i64) {
        (self.date_iso.as_str(), self.status_id)
    }
}
