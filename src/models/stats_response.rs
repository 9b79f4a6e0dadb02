//! Modelos de respuesta del API de estadísticas NBA
//!
//! El proveedor devuelve tablas con nombre (`resultSets`), cada una con una
//! lista de cabeceras y filas de valores JSON heterogéneos.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Respuesta tabular del proveedor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<ResultSet>,
}

/// Tabla con nombre dentro de una respuesta
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSet {
    pub name: String,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

impl StatsResponse {
    /// Buscar una tabla por nombre
    pub fn result_set(&self, name: &str) -> Option<&ResultSet> {
        self.result_sets.iter().find(|rs| rs.name == name)
    }
}

impl ResultSet {
    /// Posición de una columna por nombre de cabecera
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_scoreboard_shape() {
        let raw = json!({
            "resource": "scoreboardV2",
            "resultSets": [
                {
                    "name": "GameHeader",
                    "headers": ["GAME_ID", "GAME_STATUS_ID"],
                    "rowSet": [["0022400001", 3]]
                },
                {
                    "name": "LineScore",
                    "headers": ["TEAM_ID"],
                    "rowSet": []
                }
            ]
        });

        let response: StatsResponse = serde_json::from_value(raw).unwrap();

        let header = response.result_set("GameHeader").unwrap();
        assert_eq!(header.column_index("GAME_STATUS_ID"), Some(1));
        assert_eq!(header.row_set[0][0], json!("0022400001"));
        assert!(response.result_set("LineScore").unwrap().row_set.is_empty());
        assert!(response.result_set("EastConfStandingsByDay").is_none());
    }
}
