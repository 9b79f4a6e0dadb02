pub mod games_controller;
pub mod health_controller;
pub mod standings_controller;
