mod kind;
mod reading;
mod repository;
mod series;

pub use kind::SensorKind;
pub use reading::{NewSensorReading, SensorReading};
pub use repository::SensorRepository;
pub use series::{KindSeries, SensorSeries};

#[cfg(any(test, feature = "mocks"))]
pub use repository::MockSensorRepository;
