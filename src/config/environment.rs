//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las variables tienen un valor por defecto razonable para desarrollo local.

use anyhow::{bail, Context, Result};
use std::env;
use std::str::FromStr;

use crate::cache::MAX_CACHE_TTL_SECS;

pub const DEFAULT_NBA_STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    // API de estadísticas NBA
    pub nba_stats_base_url: String,
    pub nba_stats_timeout_secs: u64,
    pub nba_season: Option<String>,
    pub cache_ttl_secs: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 8000,
            host: "0.0.0.0".to_string(),
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "localhost:3000".to_string(),
            ],
            nba_stats_base_url: DEFAULT_NBA_STATS_BASE_URL.to_string(),
            nba_stats_timeout_secs: 30,
            nba_season: None,
            cache_ttl_secs: 300, // 5 minutos
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Cargar la configuración desde una fuente arbitraria de variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cache_ttl_secs = parse_var(&lookup, "CACHE_TTL_SECS")?.unwrap_or(defaults.cache_ttl_secs);
        if cache_ttl_secs > MAX_CACHE_TTL_SECS {
            bail!(
                "CACHE_TTL_SECS must be at most {} seconds, got {}",
                MAX_CACHE_TTL_SECS,
                cache_ttl_secs
            );
        }

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            host: lookup("HOST").unwrap_or(defaults.host),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            nba_stats_base_url: lookup("NBA_STATS_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.nba_stats_base_url),
            nba_stats_timeout_secs: parse_var(&lookup, "NBA_STATS_TIMEOUT_SECS")?
                .unwrap_or(defaults.nba_stats_timeout_secs),
            nba_season: lookup("NBA_SEASON").filter(|s| !s.trim().is_empty()),
            cache_ttl_secs,
        })
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => {
            let value = raw
                .trim()
                .parse::<T>()
                .with_context(|| format!("{} must be a valid number, got '{}'", key, raw))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.cache_ttl_secs, 300);
        assert_eq!(config.nba_stats_base_url, DEFAULT_NBA_STATS_BASE_URL);
        assert!(config.nba_season.is_none());
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("HOST", "127.0.0.1"),
            ("CORS_ORIGINS", "https://a.example, https://b.example,"),
            ("NBA_STATS_BASE_URL", "http://localhost:4000/stats/"),
            ("NBA_SEASON", "2023-24"),
            ("CACHE_TTL_SECS", "60"),
        ]))
        .unwrap();

        assert_eq!(config.server_url(), "127.0.0.1:9000");
        assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
        assert_eq!(config.nba_stats_base_url, "http://localhost:4000/stats");
        assert_eq!(config.nba_season.as_deref(), Some("2023-24"));
        assert_eq!(config.cache_ttl_secs, 60);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = EnvironmentConfig::from_lookup(lookup_from(&[("PORT", "abc")]));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_cache_ttl_above_limit_is_rejected() {
        let result = EnvironmentConfig::from_lookup(lookup_from(&[("CACHE_TTL_SECS", "18446744073709551615")]));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("CACHE_TTL_SECS"));
    }

    #[test]
    fn test_cache_ttl_at_limit_is_accepted() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[("CACHE_TTL_SECS", "86400")])).unwrap();

        assert_eq!(config.cache_ttl_secs, MAX_CACHE_TTL_SECS);
    }
}
