use super::{VehicleSerial, VehicleStatus, VehicleStatusRecord};
use crate::DomainError;
use async_trait::async_trait;

/// Repository interface for vehicle status records
///
/// At most one record exists per serial. Implementations should be provided
/// in the infrastructure layer.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait VehicleStatusRepository: Send + Sync {
    /// Whether a status record exists for the serial
    async fn exists(&self, serial: &VehicleSerial) -> Result<bool, DomainError>;

    /// Create the status record with the default (inactive) status.
    ///
    /// Fails with `VehicleAlreadyRegistered` if the serial already has one.
    async fn register(&self, serial: &VehicleSerial) -> Result<VehicleStatusRecord, DomainError>;

    /// Overwrite the status and refresh the timestamp.
    ///
    /// Fails with `VehicleNotFound` for an unregistered serial.
    async fn update_status(
        &self,
        serial: &VehicleSerial,
        status: VehicleStatus,
    ) -> Result<VehicleStatusRecord, DomainError>;

    /// Current status record, or `VehicleNotFound`
    async fn get_status(&self, serial: &VehicleSerial) -> Result<VehicleStatusRecord, DomainError>;

    /// Serials of every registered vehicle
    async fn list_all_serials(&self) -> Result<Vec<VehicleSerial>, DomainError>;
}
