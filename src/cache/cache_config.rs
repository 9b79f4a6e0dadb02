//! Configuración de cache
//!
//! Este módulo contiene la configuración para el cache de respuestas.

use chrono::Duration;

/// Claves fijas usadas por los endpoints
pub const STANDINGS_CACHE_KEY: &str = "standings";
pub const RECENT_GAMES_CACHE_KEY: &str = "recent_games";

/// TTL máximo admitido: un día
pub const MAX_CACHE_TTL_SECS: u64 = 86_400;

/// Configuración del cache
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub default_ttl: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: 300, // 5 minutos
        }
    }
}

impl CacheConfig {
    pub fn with_ttl_secs(default_ttl: u64) -> Self {
        Self { default_ttl }
    }

    /// Duración de frescura de una entrada, acotada a `MAX_CACHE_TTL_SECS`
    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.default_ttl.min(MAX_CACHE_TTL_SECS) as i64)
    }
}
