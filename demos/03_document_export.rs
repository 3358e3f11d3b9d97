/// document export - paginated report written to disk
use chrono::{TimeZone, Utc};
use interest_schedule_rs::chrono::NaiveDate;
use interest_schedule_rs::{Money, PaymentLedger, ReportConfig, ReportDocument, ScheduleEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== document export ===\n");

    let start = NaiveDate::from_ymd_opt(2023, 4, 1).ok_or("bad date")?;
    let mut emis = PaymentLedger::new();
    let mut date = start;
    for _ in 0..20 {
        date = date + chrono::Duration::days(30);
        emis.add(date, Money::from_major(7_500))?;
    }

    let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).ok_or("bad date")?;
    let schedule = ScheduleEngine::default().calculate(
        Money::from_major(500_000),
        start,
        emis.as_slice(),
        as_of,
    )?;

    let config = ReportConfig {
        rows_per_page: 12,
        ..ReportConfig::default()
    };
    let generated_at = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
    let document = ReportDocument::build(&schedule, &config, generated_at)?;

    println!("{} periods over {} page(s)", schedule.period_count(), document.page_count());
    let path = document.write_to(std::env::temp_dir())?;
    println!("written to {}", path.display());

    Ok(())
}
