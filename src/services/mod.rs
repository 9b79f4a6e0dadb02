//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: lectura a
//! través del cache y transformación de los datos del proveedor.

pub mod recent_games_service;
pub mod scoreboard_parser;
pub mod standings_service;

pub use recent_games_service::RecentGamesService;
pub use scoreboard_parser::{build_game_records, ScoreboardError};
pub use standings_service::StandingsService;
