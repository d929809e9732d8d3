use serde::{Deserialize, Serialize};

/// One completed stay to be priced in a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingSession {
    pub ticket: String,  // ticket number
    pub hours: f64,      // precomputed elapsed hours, NaN when unreadable
    pub vehicle: String, // raw category label as entered
}

impl ParkingSession {
    pub fn new(ticket: impl Into<String>, hours: f64, vehicle: impl Into<String>) -> Self {
        Self {
            ticket: ticket.into(),
            hours,
            vehicle: vehicle.into(),
        }
    }
}
