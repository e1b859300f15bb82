pub mod entities;
mod schema;
mod sensor_repository;
mod vehicle_status_repository;

pub use schema::{connect, create_schema};
pub use sensor_repository::SeaOrmSensorRepository;
pub use vehicle_status_repository::SeaOrmVehicleStatusRepository;

use domain::DomainError;
use sea_orm::DbErr;

fn storage_error(e: DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}
