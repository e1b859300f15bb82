use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value object identifying a vehicle.
///
/// Any non-empty string is accepted and kept byte-for-byte, so `" V1"` and
/// `"V1"` are different vehicles.
///
/// The serial is the only correlation between sensor readings and status
/// records; nothing requires a reading's serial to be registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VehicleSerial(String);

impl VehicleSerial {
    /// Create a new VehicleSerial with validation
    pub fn new(serial: impl Into<String>) -> Result<Self> {
        let serial = serial.into();

        if serial.is_empty() {
            return Err(DomainError::InvalidVehicleSerial(
                "vehicle serial cannot be empty".to_string(),
            ));
        }

        Ok(Self(serial))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VehicleSerial {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<VehicleSerial> for String {
    fn from(value: VehicleSerial) -> Self {
        value.0
    }
}

impl fmt::Display for VehicleSerial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
