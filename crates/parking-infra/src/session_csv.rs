//! CSV loader for parking sessions
//!
//! Expected columns (header optional):
//! ticket, hours, vehicle

use std::io::Read;
use std::path::Path;

use parking_domain::model::ParkingSession;
use parking_types::{Error, Result};
use tracing::{debug, warn};

pub fn load_sessions_from_csv(path: &Path) -> Result<Vec<ParkingSession>> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "CSV file not found: {}",
            path.display()
        )));
    }
    let file = std::fs::File::open(path)?;
    let sessions = read_sessions(file)?;
    debug!(path = %path.display(), count = sessions.len(), "loaded parking sessions");
    Ok(sessions)
}

/// Parse sessions from any CSV source.
///
/// Rows with fewer than three fields are skipped. An unreadable hours value
/// is kept as NaN so the session is reported as rejected rather than lost.
pub fn read_sessions<R: Read>(source: R) -> Result<Vec<ParkingSession>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut sessions = Vec::new();
    let mut first_row = true;
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        if std::mem::take(&mut first_row) && is_header(&record) {
            continue;
        }
        match parse_record(&record) {
            Some(session) => sessions.push(session),
            None => warn!(row = index + 1, "skipping malformed session row"),
        }
    }
    Ok(sessions)
}

const HEADER: [&str; 3] = ["ticket", "hours", "vehicle"];

/// Only an exact `ticket,hours,vehicle` row counts as a header
fn is_header(record: &csv::StringRecord) -> bool {
    record.len() >= HEADER.len()
        && record
            .iter()
            .zip(HEADER)
            .all(|(field, name)| field.eq_ignore_ascii_case(name))
}

fn parse_record(record: &csv::StringRecord) -> Option<ParkingSession> {
    if record.len() < 3 {
        return None;
    }
    let ticket = record.get(0)?.to_string();
    let hours = record.get(1)?.parse::<f64>().unwrap_or(f64::NAN);
    let vehicle = record.get(2)?.to_string();
    Some(ParkingSession {
        ticket,
        hours,
        vehicle,
    })
}
