use std::sync::Arc;
use tracing::{debug, info, warn};

use domain::sensor::{NewSensorReading, SensorKind, SensorReading, SensorRepository, SensorSeries};
use domain::vehicle::{VehicleSerial, VehicleStatus, VehicleStatusRecord, VehicleStatusRepository};
use domain::DomainError;

/// Entry point for every telemetry use case.
///
/// Each operation delegates to exactly one repository call, so there is
/// nothing to roll back when a call fails.
#[derive(Clone)]
pub struct VehicleMonitoringService {
    sensors: Arc<dyn SensorRepository>,
    vehicles: Arc<dyn VehicleStatusRepository>,
}

impl VehicleMonitoringService {
    pub fn new(
        sensors: Arc<dyn SensorRepository>,
        vehicles: Arc<dyn VehicleStatusRepository>,
    ) -> Self {
        Self { sensors, vehicles }
    }

    /// Register a vehicle with the default inactive status
    pub async fn register_vehicle(
        &self,
        serial: &VehicleSerial,
    ) -> Result<VehicleStatusRecord, DomainError> {
        let result = self.vehicles.register(serial).await;
        if let Err(DomainError::VehicleAlreadyRegistered(_)) = &result {
            warn!(vehicle_serial = %serial, "Duplicate registration rejected");
        }
        result
    }

    /// Overwrite the status of a registered vehicle
    pub async fn update_vehicle_status(
        &self,
        serial: &VehicleSerial,
        status: VehicleStatus,
    ) -> Result<VehicleStatusRecord, DomainError> {
        let record = self.vehicles.update_status(serial, status).await?;
        info!(vehicle_serial = %serial, status = %record.status, "Vehicle status changed");
        Ok(record)
    }

    pub async fn vehicle_status(
        &self,
        serial: &VehicleSerial,
    ) -> Result<VehicleStatusRecord, DomainError> {
        debug!(vehicle_serial = %serial, "Retrieving vehicle status");
        self.vehicles.get_status(serial).await
    }

    pub async fn list_vehicles(&self) -> Result<Vec<VehicleSerial>, DomainError> {
        debug!("Retrieving all vehicle serial numbers");
        self.vehicles.list_all_serials().await
    }

    /// Append a reading. Registration is not checked.
    pub async fn record_sensor_data(
        &self,
        reading: NewSensorReading,
    ) -> Result<SensorReading, DomainError> {
        self.sensors.insert(reading).await
    }

    /// Readings of one vehicle, optionally restricted to a single kind
    pub async fn sensor_readings(
        &self,
        serial: &VehicleSerial,
        kind: Option<SensorKind>,
    ) -> Result<Vec<SensorReading>, DomainError> {
        match kind {
            Some(kind) => self.sensors.get_for_vehicle_and_kind(serial, kind).await,
            None => self.sensors.get_all_for_vehicle(serial).await,
        }
    }

    /// All readings of one vehicle grouped into per-kind series
    pub async fn sensor_series(&self, serial: &VehicleSerial) -> Result<SensorSeries, DomainError> {
        let readings = self.sensors.get_all_for_vehicle(serial).await?;
        Ok(SensorSeries::from_readings(serial.clone(), &readings))
    }
}
