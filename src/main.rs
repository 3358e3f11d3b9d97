//! interest-schedule - command line front end for the schedule engine
//!
//! ```text
//! interest-schedule --principal 100000 --start 01/01/2025 \
//!     --emi 15/01/2025:20000 --as-of 2025-03-15 --export ./reports
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

use interest_schedule_rs::report::render_text;
use interest_schedule_rs::validation::{parse_date, parse_emi, validate_amount};
use interest_schedule_rs::{
    CalculatorConfig, Layout, PaymentLedger, ReportDocument, Result, SafeTimeProvider,
    ScheduleEngine, ScheduleError, ScheduleView, TimeSource,
};

/// Flat-rate 28-day interest schedule calculator
#[derive(Parser)]
#[command(name = "interest-schedule")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Initial amount
    #[arg(short, long)]
    principal: String,

    /// First date (DD/MM/YYYY or YYYY-MM-DD)
    #[arg(short, long)]
    start: String,

    /// EMI as DATE:AMOUNT, repeatable
    #[arg(short, long = "emi")]
    emis: Vec<String>,

    /// Calculate as of this date instead of today
    #[arg(long)]
    as_of: Option<String>,

    /// Terminal layout (table, cards)
    #[arg(short, long, default_value = "table")]
    layout: Layout,

    /// Print the schedule as json
    #[arg(long)]
    json: bool,

    /// Write the paginated report into this directory
    #[arg(long)]
    export: Option<PathBuf>,

    /// Configuration file (json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("logger init failed: {}", e);
    }

    let time = SafeTimeProvider::new(TimeSource::System);
    match run(cli, &time) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            match &e {
                ScheduleError::Validation(inner) => eprintln!("{}", inner),
                other => error!("{}", other),
            }
            ExitCode::from(exit_code(&e))
        }
    }
}

/// 2 for rejected input, 1 for everything else
fn exit_code(err: &ScheduleError) -> u8 {
    match err {
        ScheduleError::Validation(_) => 2,
        _ => 1,
    }
}

/// run one calculation and return what should be printed
fn run(cli: Cli, time: &SafeTimeProvider) -> Result<String> {
    let config = match &cli.config {
        Some(path) => CalculatorConfig::from_json_file(path)?,
        None => CalculatorConfig::default(),
    };

    let principal = validate_amount(&cli.principal)?;
    let start_date = parse_date(&cli.start)?;

    let mut ledger = PaymentLedger::new();
    for raw in &cli.emis {
        let (date, amount) = parse_emi(raw)?;
        ledger.add(date, amount)?;
    }

    let engine = ScheduleEngine::new(config.schedule.clone())?;
    let schedule = match &cli.as_of {
        Some(raw) => engine.calculate(principal, start_date, ledger.as_slice(), parse_date(raw)?)?,
        None => engine.calculate_now(principal, start_date, ledger.as_slice(), time)?,
    };

    let output = if cli.json {
        ScheduleView::from_schedule(&schedule).to_json_pretty()?
    } else {
        render_text(&schedule, &config.report.currency_symbol, cli.layout)
    };

    if let Some(dir) = &cli.export {
        let document = ReportDocument::build(&schedule, &config.report, time.now())?;
        let path = document.write_to(dir)?;
        info!("exported {}", path.display());
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn clock(y: i32, m: u32, d: u32) -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
        ))
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("interest-schedule").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_as_of_overrides_clock() {
        let args = cli(&[
            "--principal", "100000",
            "--start", "01/01/2025",
            "--emi", "15/01/2025:20000",
            "--as-of", "2025-03-15",
        ]);
        let output = run(args, &clock(2030, 1, 1)).unwrap();

        assert!(output.contains("Final Balance   Rs. 80,000.00"));
        assert!(output.ends_with("2 periods calculated."));
    }

    #[test]
    fn test_clock_used_without_as_of() {
        let args = cli(&["--principal", "100000", "--start", "2025-01-01"]);

        let output = run(args, &clock(2025, 1, 20)).unwrap();
        assert!(output.starts_with("No completed 28-day periods yet."));

        let args = cli(&["--principal", "100000", "--start", "2025-01-01"]);
        let output = run(args, &clock(2025, 3, 15)).unwrap();
        assert!(output.ends_with("2 periods calculated."));
    }

    #[test]
    fn test_json_output() {
        let args = cli(&[
            "--principal", "100000",
            "--start", "2025-01-01",
            "--as-of", "2025-03-15",
            "--json",
        ]);
        let output = run(args, &clock(2025, 3, 15)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value.get("periods").is_some());
    }

    #[test]
    fn test_invalid_input_exits_with_two() {
        let args = cli(&["--principal", "0", "--start", "2025-01-01"]);
        let err = run(args, &clock(2025, 3, 15)).unwrap_err();

        assert!(matches!(err, ScheduleError::Validation(_)));
        assert_eq!(exit_code(&err), 2);

        let args = cli(&[
            "--principal", "100000",
            "--start", "2025-01-01",
            "--emi", "not-an-emi",
        ]);
        let err = run(args, &clock(2025, 3, 15)).unwrap_err();
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_other_failures_exit_with_one() {
        let args = cli(&[
            "--principal", "100000",
            "--start", "2025-01-01",
            "--config", "/nonexistent/interest-schedule.json",
        ]);
        let err = run(args, &clock(2025, 3, 15)).unwrap_err();
        assert!(matches!(err, ScheduleError::Io(_)));
        assert_eq!(exit_code(&err), 1);

        let args = cli(&[
            "--principal", "100000",
            "--start", "2025-01-01",
            "--export", "/nonexistent",
        ]);
        let err = run(args, &clock(2025, 1, 20)).unwrap_err();
        assert!(matches!(err, ScheduleError::EmptySchedule));
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_unknown_layout_rejected_by_parser() {
        let parsed = Cli::try_parse_from([
            "interest-schedule",
            "--principal", "100000",
            "--start", "2025-01-01",
            "--layout", "grid",
        ]);
        assert!(parsed.is_err());
    }
}
