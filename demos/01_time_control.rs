/// time control - deterministic schedules with controlled time
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use interest_schedule_rs::{Money, PaymentLedger, SafeTimeProvider, ScheduleEngine, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== time control example ===\n");

    // create controlled time for testing
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap()
    ));
    let controller = time.test_control().unwrap();

    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let mut emis = PaymentLedger::new();
    emis.add(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(), Money::from_major(20_000))?;
    emis.add(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), Money::from_major(15_000))?;

    let engine = ScheduleEngine::default();

    // step forward one week at a time and watch windows complete
    for _ in 0..12 {
        let schedule = engine.calculate_now(Money::from_major(100_000), start, emis.as_slice(), &time)?;
        println!(
            "{}: {} completed period(s), interest so far {}, balance {}",
            time.now().format("%Y-%m-%d"),
            schedule.period_count(),
            schedule.total_interest.round_dp(2),
            schedule.final_balance.round_dp(2),
        );
        controller.advance(Duration::days(7));
    }

    Ok(())
}
