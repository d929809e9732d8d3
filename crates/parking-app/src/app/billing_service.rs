//! Billing Service - quote single stays and price session batches

use std::path::{Path, PathBuf};

use parking_domain::service::{price_sessions, quote_fee, summarize, FeeLine, FeeQuote, FeeSummary};
use parking_infra::load_sessions_from_csv;
use parking_types::{FeeError, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Result of pricing one CSV batch
#[derive(Debug, Clone, Serialize)]
pub struct BillingRun {
    pub source: PathBuf,
    pub summary: FeeSummary,
    pub lines: Vec<FeeLine>,
}

/// Read an hours value typed by a user.
///
/// Text that is not a number becomes NaN, which the calculator rejects as an
/// invalid duration.
pub fn parse_hours(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

pub fn quote_stay(hours_text: &str, vehicle: &str) -> std::result::Result<FeeQuote, FeeError> {
    let hours = parse_hours(hours_text);
    let result = quote_fee(hours, vehicle);
    match &result {
        Ok(quote) => debug!(
            hours,
            vehicle,
            billed_hours = quote.billed_hours,
            raw_fee = quote.raw_fee,
            fee = quote.fee,
            "quoted stay"
        ),
        Err(e) => debug!(hours_text, vehicle, error = %e, "quote rejected"),
    }
    result
}

pub fn price_batch(path: &Path) -> Result<BillingRun> {
    let sessions = load_sessions_from_csv(path)?;
    info!(path = %path.display(), sessions = sessions.len(), "pricing session batch");

    let lines = price_sessions(&sessions);
    for line in &lines {
        match (&line.quote, &line.error) {
            (Some(quote), _) => debug!(ticket = %line.session.ticket, fee = quote.fee, "priced"),
            (None, error) => warn!(
                ticket = %line.session.ticket,
                reason = error.as_deref().unwrap_or("rejected"),
                "session rejected"
            ),
        }
    }

    let summary = summarize(&lines);
    info!(
        priced = summary.priced,
        rejected = summary.rejected,
        total_billed = summary.total_billed,
        "batch priced"
    );

    Ok(BillingRun {
        source: path.to_path_buf(),
        summary,
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_types::Error;
    use std::io::Write;

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse_hours("3"), 3.0);
        assert_eq!(parse_hours(" 0.5 "), 0.5);
        assert_eq!(parse_hours("-2"), -2.0);
        assert!(parse_hours("abc").is_nan());
        assert!(parse_hours("").is_nan());
    }

    #[test]
    fn test_quote_stay() {
        let quote = quote_stay("3", "car").unwrap();
        assert_eq!(quote.fee, 11);
        assert!(matches!(
            quote_stay("three", "car"),
            Err(FeeError::InvalidDuration(_))
        ));
        assert_eq!(
            quote_stay("2", "van"),
            Err(FeeError::InvalidCategory("van".to_string()))
        );
    }

    #[test]
    fn test_price_batch() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ticket,hours,vehicle").unwrap();
        writeln!(file, "T1,24,car").unwrap();
        writeln!(file, "T2,1,Motorcycle").unwrap();
        writeln!(file, "T3,2,van").unwrap();

        let run = price_batch(file.path()).unwrap();
        assert_eq!(run.lines.len(), 3);
        assert_eq!(run.summary.priced, 2);
        assert_eq!(run.summary.rejected, 1);
        assert_eq!(run.summary.total_billed, 33);
        assert_eq!(run.source, file.path());
    }

    #[test]
    fn test_price_batch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = price_batch(&dir.path().join("none.csv")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
