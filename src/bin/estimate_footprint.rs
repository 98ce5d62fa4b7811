//! Command-line footprint estimate
//!
//! Usage: estimate_footprint [INPUT.json] [--format json] [--quick]
//!
//! Without an input file the calculator's default record (or default quick
//! profile) is estimated.

use anyhow::{Context, Result};
use clap::Parser;
use footprint_estimator::config::{ReportFormat, RunConfig};
use footprint_estimator::quick::try_estimate_quick;
use footprint_estimator::{
    compute_emissions_from_form, quick_reduction_tips, JsonFormatter, LifestyleForm,
    MarkdownFormatter, QuickProfile,
};
use std::fs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "footprint_estimator=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RunConfig::parse();
    tracing::info!("Configuration: {:?}", config);

    let report = if config.quick {
        run_quick(&config)?
    } else {
        run_detailed(&config)?
    };

    println!("{}", report);
    Ok(())
}

fn run_detailed(config: &RunConfig) -> Result<String> {
    let form = match &config.input {
        Some(path) => LifestyleForm::load(path)?,
        None => {
            tracing::info!("No input file given, using the default lifestyle record");
            LifestyleForm::default()
        }
    };

    let result = compute_emissions_from_form(&form).context("Invalid lifestyle input")?;
    tracing::info!(
        "Estimated {:.1} kg CO2/year ({})",
        result.total_annual_kg_co2,
        result.rating.label
    );

    Ok(match config.format {
        ReportFormat::Markdown => MarkdownFormatter::format(&result),
        ReportFormat::Json => JsonFormatter::format(&result)?,
    })
}

fn run_quick(config: &RunConfig) -> Result<String> {
    let profile: QuickProfile = match &config.input {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read quick profile: {:?}", path))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse quick profile: {:?}", path))?
        }
        None => QuickProfile::default(),
    };

    let results = try_estimate_quick(&profile).context("Invalid quick profile")?;
    let tips = quick_reduction_tips(&results);

    Ok(match config.format {
        ReportFormat::Markdown => MarkdownFormatter::format_quick(&results, &tips),
        ReportFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "results": results,
            "tips": tips,
        }))?,
    })
}
