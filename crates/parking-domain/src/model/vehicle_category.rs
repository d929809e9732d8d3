//! Vehicle category definitions

use std::str::FromStr;

use parking_types::FeeError;
use serde::{Deserialize, Serialize};

use super::rate_profile::{RateProfile, RATE_TABLE};

/// Vehicle categories accepted by the garage
///
/// Discriminants index into [`RATE_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Car = 0,
    Motorcycle = 1,
    Bus = 2,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 3] = [
        VehicleCategory::Car,
        VehicleCategory::Motorcycle,
        VehicleCategory::Bus,
    ];

    /// Canonical lowercase label
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleCategory::Car => "car",
            VehicleCategory::Motorcycle => "motorcycle",
            VehicleCategory::Bus => "bus",
        }
    }

    /// Match a label case-insensitively. Surrounding whitespace is not stripped.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
    }

    pub fn rate_profile(self) -> &'static RateProfile {
        &RATE_TABLE[self as usize]
    }
}

impl FromStr for VehicleCategory {
    type Err = FeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| FeeError::InvalidCategory(s.to_string()))
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
