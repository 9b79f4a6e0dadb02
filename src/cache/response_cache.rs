//! Cache en memoria para respuestas del API de estadísticas
//!
//! Guarda el último payload bueno de cada endpoint junto con la hora en que
//! se obtuvo. Las entradas nunca se eliminan: una entrada expirada sigue
//! disponible como respaldo cuando el proveedor falla.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::clock::Clock;
use super::CacheConfig;

/// Entrada almacenada en el cache
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub key: String,
    pub payload: Value,
    pub fetched_at: DateTime<Utc>,
}

/// Resultado de una lectura: el payload y su antigüedad
#[derive(Debug, Clone)]
pub struct CachedPayload {
    pub payload: Value,
    pub age: Duration,
}

/// Cache de respuestas con TTL y reloj inyectable
pub struct ResponseCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
            ttl: config.ttl(),
        }
    }

    /// Obtener el payload de una clave, fresco o no
    pub async fn get(&self, key: &str) -> Option<CachedPayload> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        let age = self.clock.now() - entry.fetched_at;

        Some(CachedPayload {
            payload: entry.payload.clone(),
            age,
        })
    }

    /// Obtener el payload solo si sigue dentro del TTL
    pub async fn get_fresh(&self, key: &str) -> Option<Value> {
        match self.get(key).await {
            Some(cached) if self.is_fresh(cached.age) => {
                debug!("📥 Cache HIT para clave: {} (edad {}s)", key, cached.age.num_seconds());
                Some(cached.payload)
            }
            Some(cached) => {
                debug!("⌛ Cache expirado para clave: {} (edad {}s)", key, cached.age.num_seconds());
                None
            }
            None => {
                debug!("📭 Cache MISS para clave: {}", key);
                None
            }
        }
    }

    /// Guardar un payload nuevo, sobrescribiendo el anterior
    pub async fn put(&self, key: &str, payload: Value) {
        let entry = CacheEntry {
            key: key.to_string(),
            payload,
            fetched_at: self.clock.now(),
        };

        self.entries.write().await.insert(key.to_string(), entry);
        debug!("💾 Payload guardado en cache para clave: {}", key);
    }

    pub fn is_fresh(&self, age: Duration) -> bool {
        age < self.ttl
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
