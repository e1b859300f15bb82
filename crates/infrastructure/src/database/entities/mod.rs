pub mod prelude;

pub mod sensor_data;
pub mod vehicle_status_data;
