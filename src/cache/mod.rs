//! Cache
//!
//! Este módulo contiene el cache en memoria de respuestas del proveedor.

pub mod cache_config;
pub mod clock;
pub mod response_cache;

pub use cache_config::{CacheConfig, MAX_CACHE_TTL_SECS, RECENT_GAMES_CACHE_KEY, STANDINGS_CACHE_KEY};
pub use clock::{Clock, ManualClock, SystemClock};
pub use response_cache::{CacheEntry, CachedPayload, ResponseCache};
