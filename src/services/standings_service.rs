//! Servicio de clasificación
//!
//! Lectura a través del cache: devuelve la clasificación cacheada si está
//! fresca, si no la pide al proveedor. Ante un fallo del proveedor sirve la
//! última copia buena aunque haya expirado.

use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::cache::{ResponseCache, STANDINGS_CACHE_KEY};
use crate::clients::StatsProvider;
use crate::utils::errors::{AppError, AppResult};

pub struct StandingsService {
    cache: Arc<ResponseCache>,
    provider: Arc<dyn StatsProvider>,
}

impl StandingsService {
    pub fn new(cache: Arc<ResponseCache>, provider: Arc<dyn StatsProvider>) -> Self {
        Self { cache, provider }
    }

    /// Obtener la clasificación de la liga
    pub async fn get_standings(&self) -> AppResult<Value> {
        if let Some(payload) = self.cache.get_fresh(STANDINGS_CACHE_KEY).await {
            info!("📥 Devolviendo datos cacheados para {}", STANDINGS_CACHE_KEY);
            return Ok(payload);
        }

        info!("🔄 Obteniendo datos frescos para {}", STANDINGS_CACHE_KEY);
        match self.provider.fetch_standings().await {
            Ok(fresh) => {
                self.cache.put(STANDINGS_CACHE_KEY, fresh.clone()).await;
                Ok(fresh)
            }
            Err(e) => {
                error!("❌ Error obteniendo clasificación: {}", e);
                match self.cache.get(STANDINGS_CACHE_KEY).await {
                    Some(stale) => {
                        warn!(
                            "⚠️ Devolviendo clasificación cacheada con {}s de antigüedad por error del proveedor",
                            stale.age.num_seconds()
                        );
                        Ok(stale.payload)
                    }
                    None => Err(AppError::UpstreamFetch(format!(
                        "Failed to fetch standings and no cache available: {}",
                        e
                    ))),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixture, FakeStatsProvider};
    use chrono::Duration;
    use serde_json::json;

    #[tokio::test]
    async fn test_second_call_within_ttl_uses_cache() {
        let (cache, clock) = fixture();
        let provider = Arc::new(FakeStatsProvider::new());
        provider.set_standings(Some(json!({ "resultSets": [{ "name": "Standings" }] })));
        let service = StandingsService::new(cache, provider.clone());

        let first = service.get_standings().await.unwrap();
        clock.advance(Duration::minutes(4));
        let second = service.get_standings().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
        assert_eq!(provider.standings_calls(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_triggers_one_fetch() {
        let (cache, clock) = fixture();
        let provider = Arc::new(FakeStatsProvider::new());
        provider.set_standings(Some(json!({ "version": 1 })));
        let service = StandingsService::new(cache, provider.clone());

        service.get_standings().await.unwrap();
        provider.set_standings(Some(json!({ "version": 2 })));
        clock.advance(Duration::minutes(5));

        let refreshed = service.get_standings().await.unwrap();
        let cached = service.get_standings().await.unwrap();

        assert_eq!(refreshed, json!({ "version": 2 }));
        assert_eq!(cached, json!({ "version": 2 }));
        assert_eq!(provider.standings_calls(), 2);
    }

    #[tokio::test]
    async fn test_upstream_failure_serves_stale_entry() {
        let (cache, clock) = fixture();
        let provider = Arc::new(FakeStatsProvider::new());
        provider.set_standings(Some(json!({ "version": 1 })));
        let service = StandingsService::new(cache, provider.clone());

        service.get_standings().await.unwrap();
        provider.set_standings(None);
        clock.advance(Duration::hours(2));

        let stale = service.get_standings().await.unwrap();

        assert_eq!(stale, json!({ "version": 1 }));
        assert_eq!(provider.standings_calls(), 2);
    }

    #[tokio::test]
    async fn test_upstream_failure_without_cache_is_an_error() {
        let (cache, _clock) = fixture();
        let provider = Arc::new(FakeStatsProvider::new());
        let service = StandingsService::new(cache.clone(), provider);

        let err = service.get_standings().await.unwrap_err();

        match err {
            AppError::UpstreamFetch(msg) => {
                assert!(msg.contains("no cache available"));
                assert!(msg.contains("503"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(cache.is_empty().await);
    }
}
