#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use nba_today_api::cache::ManualClock;
use nba_today_api::config::EnvironmentConfig;
use nba_today_api::create_app;
use nba_today_api::state::AppState;
use nba_today_api::testing::FakeStatsProvider;
use std::sync::Arc;

pub use nba_today_api::testing::{push_line_row, scoreboard, ymd, HeaderRow, LineRow};

pub struct TestApp {
    pub router: axum::Router,
    pub provider: Arc<FakeStatsProvider>,
    pub clock: Arc<ManualClock>,
}

/// Aplicación completa con el reloj fijado el 2024-01-10 12:00 UTC
pub fn make_app() -> TestApp {
    let provider = Arc::new(FakeStatsProvider::new());
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap(),
    ));
    let state = AppState::with_clock(EnvironmentConfig::default(), provider.clone(), clock.clone());

    TestApp {
        router: create_app(state),
        provider,
        clock,
    }
}
