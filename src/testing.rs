//! Utilidades de test compartidas
//!
//! Proveedor de estadísticas en memoria, reloj manual y constructores de
//! marcadores. Disponible en los tests del crate y, con la feature
//! `test-util`, en los tests de integración.

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use reqwest::StatusCode;

use crate::cache::{CacheConfig, ManualClock, ResponseCache};
use crate::clients::{StatsProvider, UpstreamError};
use crate::models::StatsResponse;

/// Cache con reloj manual fijado el 2024-01-10 a mediodía UTC
pub fn fixture() -> (Arc<ResponseCache>, Arc<ManualClock>) {
    let start = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::new(start));
    let cache = Arc::new(ResponseCache::with_clock(CacheConfig::default(), clock.clone()));
    (cache, clock)
}

/// Proveedor en memoria que cuenta las llamadas
#[derive(Default)]
pub struct FakeStatsProvider {
    standings: Mutex<Option<Value>>,
    scoreboards: Mutex<HashMap<NaiveDate, StatsResponse>>,
    standings_calls: AtomicUsize,
    scoreboard_calls: AtomicUsize,
}

impl FakeStatsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_standings(&self, standings: Option<Value>) {
        *self.standings.lock().unwrap() = standings;
    }

    pub fn set_scoreboard(&self, date: NaiveDate, scoreboard: StatsResponse) {
        self.scoreboards.lock().unwrap().insert(date, scoreboard);
    }

    pub fn clear_scoreboards(&self) {
        self.scoreboards.lock().unwrap().clear();
    }

    pub fn standings_calls(&self) -> usize {
        self.standings_calls.load(Ordering::SeqCst)
    }

    pub fn scoreboard_calls(&self) -> usize {
        self.scoreboard_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatsProvider for FakeStatsProvider {
    async fn fetch_standings(&self) -> Result<Value, UpstreamError> {
        self.standings_calls.fetch_add(1, Ordering::SeqCst);
        self.standings
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| unavailable("leaguestandingsv3"))
    }

    async fn fetch_scoreboard(&self, date: NaiveDate) -> Result<StatsResponse, UpstreamError> {
        self.scoreboard_calls.fetch_add(1, Ordering::SeqCst);
        self.scoreboards
            .lock()
            .unwrap()
            .get(&date)
            .cloned()
            .ok_or_else(|| unavailable("scoreboardv2"))
    }
}

fn unavailable(endpoint: &str) -> UpstreamError {
    UpstreamError::Status {
        endpoint: endpoint.to_string(),
        status: StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub struct HeaderRow {
    game_id: &'static str,
    date: &'static str,
    status: i64,
    home: i64,
    visitor: i64,
}

impl HeaderRow {
    pub fn new(game_id: &'static str, date: &'static str, status: i64, home: i64, visitor: i64) -> Self {
        Self { game_id, date, status, home, visitor }
    }
}

pub struct LineRow {
    game_id: &'static str,
    team_id: i64,
    abbreviation: &'static str,
    points: Option<i64>,
}

impl LineRow {
    pub fn new(game_id: &'static str, team_id: i64, abbreviation: &'static str, points: Option<i64>) -> Self {
        Self { game_id, team_id, abbreviation, points }
    }
}

/// Marcador con las columnas reales de scoreboardv2 (subconjunto)
pub fn scoreboard(games: &[HeaderRow], lines: &[LineRow]) -> StatsResponse {
    let header_rows: Vec<Value> = games
        .iter()
        .map(|g| {
            json!([g.date, 1, g.game_id, g.status, "Final", g.home, g.visitor, "2023-24"])
        })
        .collect();
    let line_rows: Vec<Value> = lines
        .iter()
        .map(|l| json!([l.game_id, l.team_id, l.abbreviation, "Boston", "20-10", l.points]))
        .collect();

    serde_json::from_value(json!({
        "resultSets": [
            {
                "name": "GameHeader",
                "headers": ["GAME_DATE_EST", "GAME_SEQUENCE", "GAME_ID", "GAME_STATUS_ID", "GAME_STATUS_TEXT", "HOME_TEAM_ID", "VISITOR_TEAM_ID", "SEASON"],
                "rowSet": header_rows
            },
            {
                "name": "LineScore",
                "headers": ["GAME_ID", "TEAM_ID", "TEAM_ABBREVIATION", "TEAM_CITY_NAME", "TEAM_WINS_LOSSES", "PTS"],
                "rowSet": line_rows
            },
            { "name": "SeriesStandings", "headers": [], "rowSet": [] }
        ]
    }))
    .unwrap()
}

/// Añadir una fila cruda a `LineScore` (mismas columnas que `scoreboard`)
pub fn push_line_row(scoreboard: &mut StatsResponse, row: Vec<Value>) {
    if let Some(set) = scoreboard.result_sets.iter_mut().find(|rs| rs.name == "LineScore") {
        set.row_set.push(row);
    }
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
