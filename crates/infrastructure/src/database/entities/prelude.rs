pub use super::sensor_data::Entity as SensorData;
pub use super::vehicle_status_data::Entity as VehicleStatusData;
