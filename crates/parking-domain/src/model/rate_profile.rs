//! Rate profiles for each vehicle category

use serde::{Deserialize, Serialize};

use super::vehicle_category::VehicleCategory;

/// Pricing for one vehicle category, in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateProfile {
    pub category: VehicleCategory,
    /// Charge for the first billable hour
    pub first_hour_rate: u64,
    /// Charge for each billable hour after the first
    pub additional_hour_rate: u64,
    /// Upper bound on the fee for one stay
    pub daily_max: u64,
}

/// Standard garage rates, ordered by `VehicleCategory` discriminant
pub static RATE_TABLE: [RateProfile; 3] = [
    RateProfile {
        category: VehicleCategory::Car,
        first_hour_rate: 5,
        additional_hour_rate: 3,
        daily_max: 30,
    },
    RateProfile {
        category: VehicleCategory::Motorcycle,
        first_hour_rate: 3,
        additional_hour_rate: 2,
        daily_max: 18,
    },
    RateProfile {
        category: VehicleCategory::Bus,
        first_hour_rate: 10,
        additional_hour_rate: 7,
        daily_max: 60,
    },
];

impl RateProfile {
    /// Tiered fee before the daily cap is applied
    pub fn raw_fee(&self, billed_hours: u64) -> u64 {
        let additional_hours = billed_hours.saturating_sub(1);
        self.first_hour_rate
            .saturating_add(additional_hours.saturating_mul(self.additional_hour_rate))
    }

    /// First billable hour count at which the daily cap takes over
    pub fn hours_to_cap(&self) -> Option<u64> {
        if self.first_hour_rate >= self.daily_max {
            return Some(1);
        }
        if self.additional_hour_rate == 0 {
            return None;
        }
        let remaining = self.daily_max - self.first_hour_rate;
        Some(1 + remaining.div_ceil(self.additional_hour_rate))
    }
}
