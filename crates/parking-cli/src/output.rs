//! Output formatting module

use parking_app::app::BillingRun;
use parking_domain::service::{generate_fee_report, FeeQuote, INVALID_FEE};
use parking_domain::RATE_TABLE;
use parking_types::{OutputFormat, Result};

pub fn output_quote(output_format: OutputFormat, hours: &str, quote: &FeeQuote) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(quote)?;
        println!("{}", content);
    } else {
        let profile = quote.category.rate_profile();
        println!("\nParking Fee");
        println!("===========");
        println!("Vehicle:         {}", quote.category);
        println!("Hours parked:    {}", hours.trim());
        println!("Billed hours:    {}", quote.billed_hours);
        println!(
            "Rates:           {} first hour, {} each additional hour",
            profile.first_hour_rate, profile.additional_hour_rate
        );
        println!("Raw fee:         {}", quote.raw_fee);
        if quote.capped {
            println!("Daily max:       {} (applied)", profile.daily_max);
        }
        println!("Fee:             {}", quote.fee);
    }
    Ok(())
}

/// Print the numeric sentinel for a rejected quote
pub fn output_sentinel(output_format: OutputFormat) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::json!({ "fee": INVALID_FEE }));
    } else {
        println!("{}", INVALID_FEE);
    }
    Ok(())
}

pub fn output_rates(output_format: OutputFormat) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&RATE_TABLE)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nRate Table");
    println!("{}", "-".repeat(60));
    println!(
        "{:<12} {:>10} {:>12} {:>10} {:>12}",
        "Vehicle", "First hour", "Additional", "Daily max", "Max from"
    );
    println!("{}", "-".repeat(60));
    for profile in RATE_TABLE.iter() {
        let max_from = profile
            .hours_to_cap()
            .map(|h| format!("{}h", h))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<12} {:>10} {:>12} {:>10} {:>12}",
            profile.category.as_str(),
            profile.first_hour_rate,
            profile.additional_hour_rate,
            profile.daily_max,
            max_from
        );
    }
    Ok(())
}

pub fn output_batch(output_format: OutputFormat, run: &BillingRun) -> Result<()> {
    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(run)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            println!("Source: {}\n", run.source.display());
            println!("{}", generate_fee_report(&run.lines));
        }
    }
    Ok(())
}
