//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El cache y el proveedor se construyen una
//! sola vez al arrancar y se inyectan aquí.

use std::sync::Arc;

use crate::cache::{CacheConfig, Clock, ResponseCache, SystemClock};
use crate::clients::StatsProvider;
use crate::config::environment::EnvironmentConfig;
use crate::services::{RecentGamesService, StandingsService};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub cache: Arc<ResponseCache>,
    pub stats: Arc<dyn StatsProvider>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, stats: Arc<dyn StatsProvider>) -> Self {
        Self::with_clock(config, stats, Arc::new(SystemClock))
    }

    /// Estado con un reloj concreto, compartido por el cache y los servicios
    pub fn with_clock(config: EnvironmentConfig, stats: Arc<dyn StatsProvider>, clock: Arc<dyn Clock>) -> Self {
        let cache_config = CacheConfig::with_ttl_secs(config.cache_ttl_secs);
        let cache = Arc::new(ResponseCache::with_clock(cache_config, clock.clone()));

        Self {
            config,
            cache,
            stats,
            clock,
        }
    }

    pub fn standings_service(&self) -> StandingsService {
        StandingsService::new(self.cache.clone(), self.stats.clone())
    }

    pub fn recent_games_service(&self) -> RecentGamesService {
        RecentGamesService::new(self.cache.clone(), self.stats.clone(), self.clock.clone())
    }
}
