//! Domain services

pub mod fee_calculator;
pub mod fee_report;

pub use fee_calculator::{billable_hours, compute_fee, quote_fee, FeeQuote, INVALID_FEE};
pub use fee_report::{generate_fee_report, price_sessions, summarize, FeeLine, FeeSummary};
