use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid vehicle serial: {0}")]
    InvalidVehicleSerial(String),

    #[error("Invalid sensor type: {0}")]
    InvalidSensorKind(String),

    #[error("Invalid vehicle status: {0}")]
    InvalidVehicleStatus(String),

    #[error("No vehicle found with serial {0}")]
    VehicleNotFound(String),

    #[error("Vehicle with serial {0} is already registered")]
    VehicleAlreadyRegistered(String),

    #[error("Database error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
