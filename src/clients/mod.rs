//! Clients - HTTP Clients for External APIs
//!
//! This module contains the statistics provider contract and its HTTP client.

pub mod nba_stats_client;
pub mod stats_provider;

// Re-export main types for convenience
pub use nba_stats_client::{format_game_date, season_for_date, NbaStatsClient};
pub use stats_provider::{StatsProvider, UpstreamError};
