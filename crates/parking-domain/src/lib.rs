//! Parking fee domain - vehicle categories, rate table, and fee services

pub mod model;
pub mod service;

pub use model::{ParkingSession, RateProfile, VehicleCategory, RATE_TABLE};
pub use service::{compute_fee, quote_fee, FeeQuote, INVALID_FEE};
