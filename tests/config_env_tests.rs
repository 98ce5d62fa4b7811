//! Environment-sourced run configuration
//!
//! Kept to a single test so no other test in this binary races on the
//! process environment.

#![cfg(feature = "cli")]

use clap::Parser;
use footprint_estimator::config::{ReportFormat, RunConfig, FORMAT_ENV, INPUT_ENV};
use std::path::PathBuf;

#[test]
fn test_environment_is_overridden_by_arguments() {
    std::env::set_var(INPUT_ENV, "env.json");
    std::env::set_var(FORMAT_ENV, "JSON");

    let from_env = RunConfig::try_parse_from(["estimate_footprint"]).unwrap();
    assert_eq!(from_env.input, Some(PathBuf::from("env.json")));
    assert_eq!(from_env.format, ReportFormat::Json);
    assert!(!from_env.quick);

    let overridden =
        RunConfig::try_parse_from(["estimate_footprint", "cli.json", "-f", "md"]).unwrap();
    assert_eq!(overridden.input, Some(PathBuf::from("cli.json")));
    assert_eq!(overridden.format, ReportFormat::Markdown);

    std::env::remove_var(INPUT_ENV);
    std::env::remove_var(FORMAT_ENV);

    let defaults = RunConfig::try_parse_from(["estimate_footprint"]).unwrap();
    assert_eq!(defaults, RunConfig::default());
}
