//! Domain model types

pub mod parking_session;
pub mod rate_profile;
pub mod vehicle_category;

pub use parking_session::ParkingSession;
pub use rate_profile::{RateProfile, RATE_TABLE};
pub use vehicle_category::VehicleCategory;
