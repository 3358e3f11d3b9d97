/// json report - serialization for other consumers
use interest_schedule_rs::chrono::NaiveDate;
use interest_schedule_rs::validation::{parse_date, parse_emi, validate_amount};
use interest_schedule_rs::{PaymentLedger, ScheduleEngine, ScheduleView};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== json schedule ===\n");

    // raw form input, validated the same way the cli does it
    let principal = validate_amount("250000")?;
    let start = parse_date("28/07/2024")?;

    let mut emis = PaymentLedger::new();
    for raw in ["2024-08-10:25000", "05/09/2024:25000", "2024-12-24:40000"] {
        let (date, amount) = parse_emi(raw)?;
        emis.add(date, amount)?;
    }

    let as_of = NaiveDate::from_ymd_opt(2025, 2, 1).ok_or("bad date")?;
    let schedule = ScheduleEngine::default().calculate(principal, start, emis.as_slice(), as_of)?;

    println!("{}", ScheduleView::from_schedule(&schedule).to_json_pretty()?);

    // invalid input surfaces a user-facing message
    if let Err(e) = parse_emi("30/02/2025:1000") {
        println!("\nrejected: {}", e);
    }

    Ok(())
}
