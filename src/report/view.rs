//! serializable view of a calculated schedule

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::report::ScheduleSummary;
use crate::schedule::Schedule;
use crate::types::Period;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleView {
    pub initial_setup: SetupView,
    pub summary: ScheduleSummary,
    pub periods: Vec<Period>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupView {
    pub initial_amount: Money,
    pub first_date: NaiveDate,
    pub as_of: NaiveDate,
    pub window_days: u32,
    pub rate_per_window: Rate,
    pub emi_count: usize,
    pub unattributed_emis: usize,
}

impl ScheduleView {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        ScheduleView {
            initial_setup: SetupView {
                initial_amount: schedule.principal,
                first_date: schedule.start_date,
                as_of: schedule.as_of,
                window_days: schedule.window_days,
                rate_per_window: schedule.rate_per_window,
                emi_count: schedule.payment_count,
                unattributed_emis: schedule.unattributed_payments,
            },
            summary: ScheduleSummary::from_schedule(schedule),
            periods: schedule.periods.clone(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
