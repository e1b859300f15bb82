use application::VehicleMonitoringService;
use infrastructure::{SeaOrmSensorRepository, SeaOrmVehicleStatusRepository};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub struct AppState {
    pub monitoring: VehicleMonitoringService,
    pub version: &'static str,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let sensors = Arc::new(SeaOrmSensorRepository::new(db.clone()));
        let vehicles = Arc::new(SeaOrmVehicleStatusRepository::new(db));

        Self {
            monitoring: VehicleMonitoringService::new(sensors, vehicles),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
