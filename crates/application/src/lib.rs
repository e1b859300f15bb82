//! Application layer - Use cases over the telemetry repositories

pub mod monitoring;

pub use monitoring::VehicleMonitoringService;
