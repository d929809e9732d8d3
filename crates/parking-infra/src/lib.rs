//! Infrastructure layer - loaders for external session data

pub mod session_csv;

pub use session_csv::{load_sessions_from_csv, read_sessions};
