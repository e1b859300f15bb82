//! Domain layer - Vehicle telemetry model with no storage dependencies
//!
//! This crate contains:
//! - Value objects (VehicleSerial, SensorKind, VehicleStatus)
//! - Records (SensorReading, VehicleStatusRecord)
//! - Repository interfaces (traits)
//! - The ISO-8601 timestamp wire format shared by every layer
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Validation happens when a value object is constructed
//! - Testable in isolation

pub mod error;
pub mod sensor;
pub mod timestamp;
pub mod vehicle;

// Re-export commonly used types
pub use error::DomainError;
pub use sensor::{KindSeries, NewSensorReading, SensorKind, SensorReading, SensorRepository, SensorSeries};
pub use vehicle::{VehicleSerial, VehicleStatus, VehicleStatusRecord, VehicleStatusRepository};

#[cfg(any(test, feature = "mocks"))]
pub use sensor::MockSensorRepository;
#[cfg(any(test, feature = "mocks"))]
pub use vehicle::MockVehicleStatusRepository;
