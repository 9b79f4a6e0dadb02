//! Servicio de partidos recientes
//!
//! Consulta el marcador de cada día en una ventana de ±3 días alrededor de
//! hoy (UTC), une las tablas de cada día en registros por partido y los
//! ordena por fecha y estado. Un día que falla se omite sin abortar el resto.

use chrono::{Duration, NaiveDate};
use futures::future::join_all;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

use super::scoreboard_parser::{build_game_records, ScoreboardError};
use crate::cache::{Clock, ResponseCache, RECENT_GAMES_CACHE_KEY};
use crate::clients::{format_game_date, StatsProvider, UpstreamError};
use crate::models::{GameRecord, RecentGamesResponse};
use crate::utils::errors::{AppError, AppResult};

/// Días antes y después de hoy incluidos en la ventana
pub const WINDOW_DAYS: i64 = 3;

/// Fallo al procesar un día concreto
#[derive(Error, Debug)]
enum DayError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    Scoreboard(#[from] ScoreboardError),
}

pub struct RecentGamesService {
    cache: Arc<ResponseCache>,
    provider: Arc<dyn StatsProvider>,
    clock: Arc<dyn Clock>,
}

impl RecentGamesService {
    pub fn new(cache: Arc<ResponseCache>, provider: Arc<dyn StatsProvider>, clock: Arc<dyn Clock>) -> Self {
        Self {
            cache,
            provider,
            clock,
        }
    }

    /// Obtener los partidos de la ventana actual como `{ "games": [...] }`
    pub async fn get_recent_games(&self) -> AppResult<Value> {
        if let Some(payload) = self.cache.get_fresh(RECENT_GAMES_CACHE_KEY).await {
            info!("📥 Devolviendo datos cacheados para {}", RECENT_GAMES_CACHE_KEY);
            return Ok(payload);
        }

        info!("🔄 Obteniendo datos frescos para {}", RECENT_GAMES_CACHE_KEY);
        let today = self.clock.now().date_naive();
        let games = self.collect_games(&date_window(today)).await;

        if !games.is_empty() {
            info!("✅ {} partidos procesados en la ventana", games.len());
            let payload = serde_json::to_value(RecentGamesResponse { games })
                .map_err(|e| AppError::Internal(format!("Failed to serialize games: {}", e)))?;
            self.cache.put(RECENT_GAMES_CACHE_KEY, payload.clone()).await;
            return Ok(payload);
        }

        warn!("⚠️ No se procesó ningún partido en la ventana de fechas");
        match self.cache.get(RECENT_GAMES_CACHE_KEY).await {
            Some(stale) => {
                warn!(
                    "⚠️ Devolviendo partidos cacheados con {}s de antigüedad por errores del proveedor",
                    stale.age.num_seconds()
                );
                Ok(stale.payload)
            }
            None => Err(AppError::NoDataAvailable(
                "Failed to fetch recent games and no cache available.".to_string(),
            )),
        }
    }

    async fn collect_games(&self, dates: &[NaiveDate]) -> Vec<GameRecord> {
        let per_day = join_all(dates.iter().map(|&date| async move {
            let result = self.games_for_date(date).await;
            (date, result)
        }))
        .await;

        let mut games = Vec::new();
        for (date, result) in per_day {
            match result {
                Ok(day_games) => games.extend(day_games),
                Err(DayError::Scoreboard(ScoreboardError::MissingDataSet(name))) => {
                    warn!(
                        "⚠️ Falta la tabla '{}' para la fecha {}, se omite",
                        name,
                        format_game_date(date)
                    );
                }
                Err(e) => {
                    error!(
                        "❌ Error procesando el marcador de {}: {}. Se omite la fecha",
                        format_game_date(date),
                        e
                    );
                }
            }
        }

        sort_games(&mut games);
        games
    }

    async fn games_for_date(&self, date: NaiveDate) -> Result<Vec<GameRecord>, DayError> {
        let scoreboard = self.provider.fetch_scoreboard(date).await?;
        Ok(build_game_records(&scoreboard)?)
    }
}

/// Fechas de hoy - WINDOW_DAYS hasta hoy + WINDOW_DAYS, en orden
pub fn date_window(today: NaiveDate) -> Vec<NaiveDate> {
    (-WINDOW_DAYS..=WINDOW_DAYS)
        .map(|offset| today + Duration::days(offset))
        .collect()
}

/// Orden estable por (fecha, estado) ascendente
pub fn sort_games(games: &mut [GameRecord]) {
    games.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}
