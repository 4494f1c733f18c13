use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::VehicleTypeParseError;

/// Auction vehicle classification. The variant drives fee rates and limits,
/// so the set is closed; new classifications are a code change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VehicleType {
    Common,
    Luxury,
}

impl VehicleType {
    /// All variants, in the order they are presented to callers.
    pub const ALL: [VehicleType; 2] = [VehicleType::Common, VehicleType::Luxury];

    /// Canonical string form used on the wire and in labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Luxury => "Luxury",
        }
    }

    /// Parse an externally supplied string, matching case-insensitively.
    ///
    /// Surrounding whitespace is not stripped: `"common "` is rejected as
    /// unknown, while blank input gets its own error.
    pub fn parse(input: &str) -> Result<Self, VehicleTypeParseError> {
        if input.trim().is_empty() {
            return Err(VehicleTypeParseError::Empty);
        }

        if input.eq_ignore_ascii_case("common") {
            Ok(Self::Common)
        } else if input.eq_ignore_ascii_case("luxury") {
            Ok(Self::Luxury)
        } else {
            Err(VehicleTypeParseError::Unknown { value: input.to_string() })
        }
    }
}

impl FromStr for VehicleType {
    type Err = VehicleTypeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for VehicleType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VehicleType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// One selectable vehicle type as served to form pickers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleTypeOption {
    pub value: String,
    pub label: String,
}

/// Enumerate every vehicle type for UI pickers, in declaration order.
pub fn vehicle_type_options() -> Vec<VehicleTypeOption> {
    VehicleType::ALL
        .iter()
        .map(|vehicle_type| VehicleTypeOption {
            value: vehicle_type.as_str().to_string(),
            label: vehicle_type.as_str().to_string(),
        })
        .collect()
}
