//! Optional Value Algebra - CLI
//!
//! Thin harness around the conformance suite: runs every operator check,
//! prints one line per divergence, and exits with the regression count so
//! automated runners can treat nonzero as failure.

use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use ova_core::{ConformanceReport, ConformanceSuite, Op};

/// Exit codes above this are reserved for harness failures, and counts are
/// clamped so they cannot alias to 0 modulo 256.
const MAX_DIVERGENCE_STATUS: usize = 101;
const HARNESS_ERROR_STATUS: i32 = 102;

#[derive(Parser)]
#[command(name = "ova", version, about = "Optional value algebra conformance suite")]
struct Cli {
    /// Emit the full report as JSON instead of human-readable lines
    #[arg(long)]
    json: bool,

    /// Operator name to treat as expected-divergent (repeatable)
    #[arg(long = "expect", value_name = "OP")]
    expect: Vec<String>,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(regressions) => process::exit(regressions.min(MAX_DIVERGENCE_STATUS) as i32),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            process::exit(HARNESS_ERROR_STATUS);
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<usize> {
    let mut suite = ConformanceSuite::new();
    for name in &cli.expect {
        suite = suite.expect_divergent(Op::from_name(name)?);
    }

    let report = suite.run();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(report.regression_count())
}

fn print_report(report: &ConformanceReport) {
    for d in &report.divergences {
        let tag = if d.expected {
            "DIVERGENCE (expected)".yellow().bold()
        } else {
            "DIVERGENCE".red().bold()
        };
        println!(
            "{} op={} row={} tagged=({}, {}) sentinel={} [0x{:016X}] decoded {:?} vs {:?}",
            tag,
            d.op,
            d.row,
            d.tagged_magnitude,
            if d.tagged_undefined { "UNDEF" } else { "DEF" },
            d.sentinel_value,
            d.sentinel_bits,
            d.tagged_logical,
            d.sentinel_logical,
        );
    }

    let regressions = report.regression_count();
    if regressions == 0 {
        println!(
            "{} {} checks, {} divergences",
            "conformant:".green().bold(),
            report.checks,
            report.divergence_count(),
        );
    } else {
        println!(
            "{} {} checks, {} divergences ({} regressions)",
            "non-conformant:".red().bold(),
            report.checks,
            report.divergence_count(),
            regressions,
        );
    }
}
