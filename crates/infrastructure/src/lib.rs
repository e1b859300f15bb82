//! Infrastructure layer - SQLite persistence and configuration

pub mod config;
pub mod database;

pub use config::AppConfig;
pub use database::{SeaOrmSensorRepository, SeaOrmVehicleStatusRepository};
