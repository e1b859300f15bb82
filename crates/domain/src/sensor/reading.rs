use super::SensorKind;
use crate::vehicle::VehicleSerial;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reading as submitted for ingestion, before storage assigns an id.
///
/// The timestamp is the capture time supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSensorReading {
    pub vehicle_serial: VehicleSerial,
    #[serde(rename = "sensor_type")]
    pub sensor_kind: SensorKind,
    pub value: f64,
    #[serde(with = "crate::timestamp::iso_micros")]
    pub timestamp: DateTime<Utc>,
}

impl NewSensorReading {
    pub fn new(
        vehicle_serial: VehicleSerial,
        sensor_kind: SensorKind,
        value: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            vehicle_serial,
            sensor_kind,
            value,
            timestamp,
        }
    }
}

/// A stored reading. Append-only: never updated, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub id: i64,
    pub vehicle_serial: VehicleSerial,
    #[serde(rename = "sensor_type")]
    pub sensor_kind: SensorKind,
    pub value: f64,
    #[serde(with = "crate::timestamp::iso_micros")]
    pub timestamp: DateTime<Utc>,
}

impl SensorReading {
    /// Whether this reading carries the same data as the submitted one
    pub fn matches(&self, new: &NewSensorReading) -> bool {
        self.vehicle_serial == new.vehicle_serial
            && self.sensor_kind == new.sensor_kind
            && self.value == new.value
            && self.timestamp == new.timestamp
    }
}
