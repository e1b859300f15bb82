use super::{VehicleSerial, VehicleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single current status row of one vehicle.
///
/// `timestamp` is server-assigned and refreshed on every status write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleStatusRecord {
    pub id: i64,
    pub vehicle_serial: VehicleSerial,
    pub status: VehicleStatus,
    #[serde(with = "crate::timestamp::iso_micros")]
    pub timestamp: DateTime<Utc>,
}
