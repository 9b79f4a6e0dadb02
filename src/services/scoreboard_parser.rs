//! Transformación de un marcador diario en registros por partido
//!
//! Une las tablas `GameHeader` y `LineScore` de un marcador: cada fila de
//! cabecera produce un partido y cada fila de `LineScore` se asigna al lado
//! local o visitante cuyo id de equipo coincide. Las columnas se localizan
//! por nombre de cabecera.

use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use crate::models::{GameRecord, ResultSet, StatsResponse, TeamLine};

pub const GAME_HEADER_SET: &str = "GameHeader";
pub const LINE_SCORE_SET: &str = "LineScore";

/// Errores al transformar el marcador de un día
#[derive(Error, Debug, PartialEq)]
pub enum ScoreboardError {
    #[error("missing result set '{0}'")]
    MissingDataSet(String),

    #[error("result set '{set}' has no column '{column}'")]
    MissingColumn { set: String, column: String },

    #[error("invalid value in '{set}' row {row}, column '{column}'")]
    InvalidCell {
        set: String,
        column: String,
        row: usize,
    },
}

/// Convertir el marcador de un día en registros de partido, en el orden de `GameHeader`
pub fn build_game_records(scoreboard: &StatsResponse) -> Result<Vec<GameRecord>, ScoreboardError> {
    let header_set = required_set(scoreboard, GAME_HEADER_SET)?;
    let line_set = required_set(scoreboard, LINE_SCORE_SET)?;

    let header = HeaderColumns::locate(header_set)?;
    let line = LineColumns::locate(line_set)?;

    let mut games: Vec<GameRecord> = Vec::with_capacity(header_set.row_set.len());
    let mut by_game_id: HashMap<String, usize> = HashMap::new();

    for (row_idx, row) in header_set.row_set.iter().enumerate() {
        let cells = Cells { set: header_set, row, row_idx };
        let record = GameRecord {
            game_id: cells.string(header.game_id)?,
            date_iso: cells.string(header.date)?.chars().take(10).collect(),
            status_id: cells.integer(header.status_id)?,
            status_text: cells.optional_string(header.status_text)?.unwrap_or_default(),
            home_team_id: cells.readable_integer(header.home_team_id),
            visitor_team_id: cells.readable_integer(header.visitor_team_id),
            home_team: None,
            visitor_team: None,
        };

        // Un GAME_ID repetido reemplaza al anterior sin cambiar su posición
        match by_game_id.get(&record.game_id) {
            Some(&pos) => games[pos] = record,
            None => {
                by_game_id.insert(record.game_id.clone(), games.len());
                games.push(record);
            }
        }
    }

    for (row_idx, row) in line_set.row_set.iter().enumerate() {
        let cells = Cells { set: line_set, row, row_idx };
        // Una fila cuyos ids no se pueden leer no coincide con ningún partido
        let Some(game_id) = cells.readable_string(line.game_id) else {
            continue;
        };
        let Some(&pos) = by_game_id.get(&game_id) else {
            continue;
        };
        let Some(team_id) = cells.readable_integer(line.team_id) else {
            continue;
        };

        let game = &games[pos];
        let is_home = game.home_team_id == Some(team_id);
        let is_visitor = !is_home && game.visitor_team_id == Some(team_id);
        if !is_home && !is_visitor {
            continue;
        }

        let team = TeamLine {
            team_id,
            abbreviation: cells.optional_string(line.abbreviation)?.unwrap_or_default(),
            points: cells.optional_integer(line.points)?,
            win_loss_record: cells.optional_string(line.win_loss)?,
        };

        let game = &mut games[pos];
        if is_home {
            game.home_team = Some(team);
        } else {
            game.visitor_team = Some(team);
        }
    }

    Ok(games)
}

fn required_set<'a>(scoreboard: &'a StatsResponse, name: &str) -> Result<&'a ResultSet, ScoreboardError> {
    scoreboard
        .result_set(name)
        .ok_or_else(|| ScoreboardError::MissingDataSet(name.to_string()))
}

fn column(set: &ResultSet, name: &str) -> Result<usize, ScoreboardError> {
    set.column_index(name).ok_or_else(|| ScoreboardError::MissingColumn {
        set: set.name.clone(),
        column: name.to_string(),
    })
}

struct HeaderColumns {
    game_id: (usize, &'static str),
    date: (usize, &'static str),
    status_id: (usize, &'static str),
    status_text: (usize, &'static str),
    home_team_id: (usize, &'static str),
    visitor_team_id: (usize, &'static str),
}

impl HeaderColumns {
    fn locate(set: &ResultSet) -> Result<Self, ScoreboardError> {
        let col = |name: &'static str| column(set, name).map(|idx| (idx, name));
        Ok(Self {
            game_id: col("GAME_ID")?,
            date: col("GAME_DATE_EST")?,
            status_id: col("GAME_STATUS_ID")?,
            status_text: col("GAME_STATUS_TEXT")?,
            home_team_id: col("HOME_TEAM_ID")?,
            visitor_team_id: col("VISITOR_TEAM_ID")?,
        })
    }
}

struct LineColumns {
    game_id: (usize, &'static str),
    team_id: (usize, &'static str),
    abbreviation: (usize, &'static str),
    points: (usize, &'static str),
    win_loss: (usize, &'static str),
}

impl LineColumns {
    fn locate(set: &ResultSet) -> Result<Self, ScoreboardError> {
        let col = |name: &'static str| column(set, name).map(|idx| (idx, name));
        Ok(Self {
            game_id: col("GAME_ID")?,
            team_id: col("TEAM_ID")?,
            abbreviation: col("TEAM_ABBREVIATION")?,
            points: col("PTS")?,
            win_loss: col("TEAM_WINS_LOSSES")?,
        })
    }
}

/// Acceso tipado a las celdas de una fila
struct Cells<'a> {
    set: &'a ResultSet,
    row: &'a [Value],
    row_idx: usize,
}

impl Cells<'_> {
    fn invalid(&self, column: &str) -> ScoreboardError {
        ScoreboardError::InvalidCell {
            set: self.set.name.clone(),
            column: column.to_string(),
            row: self.row_idx,
        }
    }

    fn cell(&self, (idx, name): (usize, &'static str)) -> Result<&Value, ScoreboardError> {
        self.row.get(idx).ok_or_else(|| self.invalid(name))
    }

    fn optional_string(&self, col: (usize, &'static str)) -> Result<Option<String>, ScoreboardError> {
        match self.cell(col)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            Value::Number(n) => Ok(Some(n.to_string())),
            _ => Err(self.invalid(col.1)),
        }
    }

    fn string(&self, col: (usize, &'static str)) -> Result<String, ScoreboardError> {
        self.optional_string(col)?.ok_or_else(|| self.invalid(col.1))
    }

    fn optional_integer(&self, col: (usize, &'static str)) -> Result<Option<i64>, ScoreboardError> {
        match self.cell(col)? {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .map(Some)
                .ok_or_else(|| self.invalid(col.1)),
            Value::String(s) => s.trim().parse().map(Some).map_err(|_| self.invalid(col.1)),
            _ => Err(self.invalid(col.1)),
        }
    }

    fn integer(&self, col: (usize, &'static str)) -> Result<i64, ScoreboardError> {
        self.optional_integer(col)?.ok_or_else(|| self.invalid(col.1))
    }

    /// Valor de una celda de id; nulo o ilegible cuenta como ausente
    fn readable_integer(&self, col: (usize, &'static str)) -> Option<i64> {
        self.optional_integer(col).ok().flatten()
    }

    fn readable_string(&self, col: (usize, &'static str)) -> Option<String> {
        self.optional_string(col).ok().flatten()
    }
}
