//! Application use cases

pub mod billing_service;

pub use billing_service::{parse_hours, price_batch, quote_stay, BillingRun};
