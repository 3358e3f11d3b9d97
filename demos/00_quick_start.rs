/// quick start - minimal example to get started
use interest_schedule_rs::chrono::NaiveDate;
use interest_schedule_rs::report::render_text;
use interest_schedule_rs::{Layout, Money, PaymentLedger, ScheduleEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a 1,00,000 balance starting on the first of january
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).ok_or("bad date")?;

    let mut emis = PaymentLedger::new();
    emis.add(NaiveDate::from_ymd_opt(2025, 1, 15).ok_or("bad date")?, Money::from_major(20_000))?;

    let as_of = NaiveDate::from_ymd_opt(2025, 3, 15).ok_or("bad date")?;
    let schedule = ScheduleEngine::default().calculate(
        Money::from_major(100_000),
        start,
        emis.as_slice(),
        as_of,
    )?;

    println!("{}", render_text(&schedule, "Rs.", Layout::Table));

    Ok(())
}
