//! Batch pricing and fee report

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{ParkingSession, VehicleCategory};
use crate::service::fee_calculator::{quote_fee, FeeQuote, INVALID_FEE};

/// Pricing outcome for a single session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeLine {
    pub session: ParkingSession,
    pub quote: Option<FeeQuote>,
    /// Charged amount, or -1 when the session was rejected
    pub fee: f64,
    pub error: Option<String>,
}

impl FeeLine {
    pub fn is_rejected(&self) -> bool {
        self.quote.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeSummary {
    pub total_sessions: usize,
    pub priced: usize,
    pub rejected: usize,
    pub capped: usize,
    pub total_billed: u64,
    pub by_category: BTreeMap<VehicleCategory, u64>,
}

pub fn price_sessions(sessions: &[ParkingSession]) -> Vec<FeeLine> {
    sessions
        .iter()
        .map(|session| match quote_fee(session.hours, &session.vehicle) {
            Ok(quote) => FeeLine {
                session: session.clone(),
                quote: Some(quote),
                fee: quote.fee as f64,
                error: None,
            },
            Err(e) => FeeLine {
                session: session.clone(),
                quote: None,
                fee: INVALID_FEE,
                error: Some(e.to_string()),
            },
        })
        .collect()
}

pub fn summarize(lines: &[FeeLine]) -> FeeSummary {
    let mut summary = FeeSummary {
        total_sessions: lines.len(),
        ..Default::default()
    };
    for quote in lines.iter().filter_map(|line| line.quote.as_ref()) {
        summary.priced += 1;
        if quote.capped {
            summary.capped += 1;
        }
        summary.total_billed = summary.total_billed.saturating_add(quote.fee);
        let entry = summary.by_category.entry(quote.category).or_insert(0);
        *entry = entry.saturating_add(quote.fee);
    }
    summary.rejected = summary.total_sessions - summary.priced;
    summary
}

pub fn generate_fee_report(lines: &[FeeLine]) -> String {
    let summary = summarize(lines);

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("                Parking Fee Report                \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Total sessions:   {}\n", summary.total_sessions));
    report.push_str(&format!("  Priced:           {}\n", summary.priced));
    report.push_str(&format!("  Rejected:         {}\n", summary.rejected));
    report.push_str(&format!("  Hit daily max:    {}\n", summary.capped));
    report.push_str(&format!("  Total billed:     {}\n", summary.total_billed));
    for (category, total) in &summary.by_category {
        report.push_str(&format!("    {:<14} {}\n", category.as_str(), total));
    }
    report.push('\n');

    if summary.priced > 0 {
        report.push_str("[Priced Sessions]\n");
        report.push_str("-".repeat(62).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<12} {:<12} {:>8} {:>8} {:>8} {:>8}\n",
            "Ticket", "Vehicle", "Hours", "Billed", "Raw", "Fee"
        ));
        report.push_str("-".repeat(62).as_str());
        report.push('\n');
        for line in lines {
            let Some(quote) = line.quote.as_ref() else {
                continue;
            };
            report.push_str(&format!(
                "{:<12} {:<12} {:>8.2} {:>7}h {:>8} {:>8}{}\n",
                truncate_str(&line.session.ticket, 11),
                quote.category.as_str(),
                line.session.hours,
                quote.billed_hours,
                quote.raw_fee,
                quote.fee,
                if quote.capped { " (max)" } else { "" }
            ));
        }
        report.push('\n');
    }

    if summary.rejected > 0 {
        report.push_str("[Rejected Sessions]\n");
        report.push_str("-".repeat(62).as_str());
        report.push('\n');
        report.push_str(&format!("{:<12} {:<12} {:>8}  {}\n", "Ticket", "Vehicle", "Hours", "Reason"));
        report.push_str("-".repeat(62).as_str());
        report.push('\n');
        for line in lines.iter().filter(|l| l.is_rejected()) {
            report.push_str(&format!(
                "{:<12} {:<12} {:>8.2}  {}\n",
                truncate_str(&line.session.ticket, 11),
                truncate_str(&line.session.vehicle, 11),
                line.session.hours,
                line.error.as_deref().unwrap_or("rejected")
            ));
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
