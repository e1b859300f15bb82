use super::{NewSensorReading, SensorKind, SensorReading};
use crate::DomainError;
use crate::vehicle::VehicleSerial;
use async_trait::async_trait;

/// Repository interface for the append-only sensor reading log
///
/// Queries return readings in insertion order and an empty list (not an
/// error) when nothing matches.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait SensorRepository: Send + Sync {
    /// Append one reading. The vehicle does not need to be registered.
    async fn insert(&self, reading: NewSensorReading) -> Result<SensorReading, DomainError>;

    /// All readings for a vehicle
    async fn get_all_for_vehicle(
        &self,
        serial: &VehicleSerial,
    ) -> Result<Vec<SensorReading>, DomainError>;

    /// Readings for a vehicle restricted to one sensor kind
    async fn get_for_vehicle_and_kind(
        &self,
        serial: &VehicleSerial,
        kind: SensorKind,
    ) -> Result<Vec<SensorReading>, DomainError>;
}
