mod service;

pub use service::VehicleMonitoringService;
