use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operational status of a vehicle.
///
/// Transitions are unrestricted: any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Active,
    /// Initial status of a freshly registered vehicle
    Inactive,
    Maintenance,
    Error,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 4] = [
        Self::Active,
        Self::Inactive,
        Self::Maintenance,
        Self::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Maintenance => "maintenance",
            Self::Error => "error",
        }
    }
}

impl Default for VehicleStatus {
    fn default() -> Self {
        Self::Inactive
    }
}

impl FromStr for VehicleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::InvalidVehicleStatus(s.to_string()))
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
