//! Parking fee calculation
//!
//! Pure and deterministic. The fee for a stay is
//! `min(first_hour + (ceil(hours) - 1) * additional_hour, daily_max)`
//! using the category's [`RateProfile`](crate::model::RateProfile).
//!
//! [`quote_fee`] returns a typed result. [`compute_fee`] keeps the numeric
//! contract where every rejection collapses to `-1`.

use parking_types::FeeError;
use serde::{Deserialize, Serialize};

use crate::model::VehicleCategory;

/// Fee returned by [`compute_fee`] for any rejected input
pub const INVALID_FEE: f64 = -1.0;

/// Breakdown of a successfully priced stay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub category: VehicleCategory,
    pub billed_hours: u64,
    /// Tiered fee before the daily cap
    pub raw_fee: u64,
    pub fee: u64,
    pub capped: bool,
}

/// Round a duration up to whole billable hours.
///
/// Durations that are not finite or not strictly positive are rejected.
/// Very large durations saturate at `u64::MAX`.
pub fn billable_hours(duration: f64) -> Result<u64, FeeError> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(FeeError::InvalidDuration(duration));
    }
    Ok(duration.ceil() as u64)
}

pub fn quote_fee(duration: f64, category: &str) -> Result<FeeQuote, FeeError> {
    let billed_hours = billable_hours(duration)?;
    let category: VehicleCategory = category.parse()?;

    let profile = category.rate_profile();
    let raw_fee = profile.raw_fee(billed_hours);
    let fee = raw_fee.min(profile.daily_max);

    Ok(FeeQuote {
        category,
        billed_hours,
        raw_fee,
        fee,
        capped: raw_fee > profile.daily_max,
    })
}

/// Fee for a stay, or [`INVALID_FEE`] when either input is rejected
pub fn compute_fee(duration: f64, category: &str) -> f64 {
    quote_fee(duration, category)
        .map(|quote| quote.fee as f64)
        .unwrap_or(INVALID_FEE)
}
