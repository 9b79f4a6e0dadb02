//! Cliente HTTP para stats.nba.com
//!
//! El servicio rechaza clientes sin cabeceras de navegador, por eso todas las
//! peticiones pasan por `stats_request`.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use super::stats_provider::{StatsProvider, UpstreamError};
use crate::config::EnvironmentConfig;
use crate::models::StatsResponse;

const LEAGUE_ID: &str = "00";
const SEASON_TYPE: &str = "Regular Season";

/// Cliente HTTP para el API de estadísticas NBA
pub struct NbaStatsClient {
    client: Client,
    base_url: String,
    season: Option<String>,
}

impl NbaStatsClient {
    /// Crear nuevo cliente con URL base configurable
    pub fn new(base_url: String, timeout: Duration, season: Option<String>) -> Result<Self, UpstreamError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            season,
        })
    }

    pub fn from_config(config: &EnvironmentConfig) -> Result<Self, UpstreamError> {
        Self::new(
            config.nba_stats_base_url.clone(),
            Duration::from_secs(config.nba_stats_timeout_secs),
            config.nba_season.clone(),
        )
    }

    /// Temporada a consultar: la configurada o la que contiene la fecha de hoy
    fn season(&self) -> String {
        self.season
            .clone()
            .unwrap_or_else(|| season_for_date(Utc::now().date_naive()))
    }

    async fn stats_request(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Value, UpstreamError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("🌐 GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("Accept", "application/json, text/plain, */*")
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("Cache-Control", "no-cache")
            .header("Connection", "keep-alive")
            .header("Origin", "https://www.nba.com")
            .header("Pragma", "no-cache")
            .header("Referer", "https://www.nba.com/")
            .header("User-Agent", "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/140.0.0.0 Safari/537.36")
            .header("x-nba-stats-origin", "stats")
            .header("x-nba-stats-token", "true")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| UpstreamError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

#[async_trait]
impl StatsProvider for NbaStatsClient {
    async fn fetch_standings(&self) -> Result<Value, UpstreamError> {
        let season = self.season();
        info!("📊 Consultando clasificación de la temporada {}", season);

        self.stats_request(
            "leaguestandingsv3",
            &[
                ("LeagueID", LEAGUE_ID.to_string()),
                ("Season", season),
                ("SeasonType", SEASON_TYPE.to_string()),
            ],
        )
        .await
    }

    async fn fetch_scoreboard(&self, date: NaiveDate) -> Result<StatsResponse, UpstreamError> {
        let game_date = format_game_date(date);
        info!("🏀 Consultando marcador para la fecha {}", game_date);

        let raw = self
            .stats_request(
                "scoreboardv2",
                &[
                    ("DayOffset", "0".to_string()),
                    ("GameDate", game_date),
                    ("LeagueID", LEAGUE_ID.to_string()),
                ],
            )
            .await?;

        serde_json::from_value(raw).map_err(|source| UpstreamError::Decode {
            endpoint: "scoreboardv2".to_string(),
            source,
        })
    }
}

/// Formato de fecha que espera el proveedor (MM/DD/YYYY)
pub fn format_game_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Temporada "YYYY-YY" que contiene la fecha; una temporada empieza en octubre
pub fn season_for_date(date: NaiveDate) -> String {
    let start_year = if date.month() > 9 {
        date.year()
    } else {
        date.year() - 1
    };
    format!("{}-{:02}", start_year, (start_year + 1) % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/stats", addr)
    }

    fn client_for(base_url: String) -> NbaStatsClient {
        NbaStatsClient::new(base_url, Duration::from_secs(5), Some("2024-25".to_string())).unwrap()
    }

    #[test]
    fn test_season_for_date() {
        assert_eq!(season_for_date(NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()), "2024-25");
        assert_eq!(season_for_date(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()), "2024-25");
        assert_eq!(season_for_date(NaiveDate::from_ymd_opt(2025, 9, 30).unwrap()), "2024-25");
        assert_eq!(season_for_date(NaiveDate::from_ymd_opt(1999, 11, 2).unwrap()), "1999-00");
    }

    #[test]
    fn test_format_game_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_game_date(date), "01/05/2025");
    }

    #[tokio::test]
    async fn test_fetch_scoreboard_sends_expected_query() {
        let router = Router::new().route(
            "/stats/scoreboardv2",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("GameDate").map(String::as_str), Some("01/05/2025"));
                assert_eq!(params.get("LeagueID").map(String::as_str), Some("00"));
                Json(json!({
                    "resultSets": [
                        { "name": "GameHeader", "headers": ["GAME_ID"], "rowSet": [["0022400500"]] }
                    ]
                }))
            }),
        );
        let client = client_for(spawn_stub(router).await);

        let scoreboard = client
            .fetch_scoreboard(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap())
            .await
            .unwrap();

        let header = scoreboard.result_set("GameHeader").unwrap();
        assert_eq!(header.row_set.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_standings_returns_body_unmodified() {
        let router = Router::new().route(
            "/stats/leaguestandingsv3",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("Season").map(String::as_str), Some("2024-25"));
                assert_eq!(params.get("SeasonType").map(String::as_str), Some("Regular Season"));
                Json(json!({ "resource": "leaguestandingsv3", "resultSets": [] }))
            }),
        );
        let client = client_for(spawn_stub(router).await);

        let standings = client.fetch_standings().await.unwrap();

        assert_eq!(standings, json!({ "resource": "leaguestandingsv3", "resultSets": [] }));
    }

    #[tokio::test]
    async fn test_fetch_standings_keeps_key_order() {
        const RAW: &str = r#"{"resource":"leaguestandingsv3","parameters":{"SeasonType":"Regular Season","LeagueID":"00"},"resultSets":[{"name":"Standings","rowSet":[],"headers":["TeamID","TeamCity"]}]}"#;
        let router = Router::new().route("/stats/leaguestandingsv3", get(|| async { RAW }));
        let client = client_for(spawn_stub(router).await);

        let standings = client.fetch_standings().await.unwrap();

        assert_eq!(serde_json::to_string(&standings).unwrap(), RAW);
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let router = Router::new().route(
            "/stats/leaguestandingsv3",
            get(|| async { (StatusCode::FORBIDDEN, "blocked") }),
        );
        let client = client_for(spawn_stub(router).await);

        let err = client.fetch_standings().await.unwrap_err();

        match err {
            UpstreamError::Status { status, .. } => assert_eq!(status, StatusCode::FORBIDDEN),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_decode_error() {
        let router = Router::new().route("/stats/leaguestandingsv3", get(|| async { "<html>" }));
        let client = client_for(spawn_stub(router).await);

        let err = client.fetch_standings().await.unwrap_err();

        assert!(matches!(err, UpstreamError::Decode { .. }));
    }
}
