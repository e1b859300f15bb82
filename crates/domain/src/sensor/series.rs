use super::{SensorKind, SensorReading};
use crate::vehicle::VehicleSerial;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Parallel timestamp/value columns for one sensor kind
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KindSeries {
    #[serde(serialize_with = "crate::timestamp::serialize_all")]
    pub timestamps: Vec<DateTime<Utc>>,
    pub values: Vec<f64>,
}

impl KindSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// All readings of one vehicle grouped per sensor kind, ready for plotting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorSeries {
    pub vehicle_serial: VehicleSerial,
    pub series: BTreeMap<SensorKind, KindSeries>,
}

impl SensorSeries {
    /// Group readings by kind, keeping their relative order.
    ///
    /// Readings for other vehicles are skipped.
    pub fn from_readings(vehicle_serial: VehicleSerial, readings: &[SensorReading]) -> Self {
        let mut series: BTreeMap<SensorKind, KindSeries> = BTreeMap::new();

        for reading in readings
            .iter()
            .filter(|r| r.vehicle_serial == vehicle_serial)
        {
            let entry = series.entry(reading.sensor_kind).or_default();
            entry.timestamps.push(reading.timestamp);
            entry.values.push(reading.value);
        }

        Self {
            vehicle_serial,
            series,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn get(&self, kind: SensorKind) -> Option<&KindSeries> {
        self.series.get(&kind)
    }
}
