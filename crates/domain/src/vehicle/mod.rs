mod record;
mod repository;
mod serial;
mod status;

pub use record::VehicleStatusRecord;
pub use repository::VehicleStatusRepository;
pub use serial::VehicleSerial;
pub use status::VehicleStatus;

#[cfg(any(test, feature = "mocks"))]
pub use repository::MockVehicleStatusRepository;
