//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos del proveedor de estadísticas
//! y los registros que expone la API.

pub mod game;
pub mod stats_response;

pub use game::*;
pub use stats_response::*;
