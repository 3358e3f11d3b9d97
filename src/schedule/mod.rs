pub mod engine;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::Period;

pub use engine::ScheduleEngine;

/// result of one schedule calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub principal: Money,
    pub start_date: NaiveDate,
    /// the date the calculation was run against
    pub as_of: NaiveDate,
    pub window_days: u32,
    pub rate_per_window: Rate,
    pub periods: Vec<Period>,
    /// principal less every attributed payment; equals `principal` when no period completed
    pub final_balance: Money,
    /// sum of payments attributed to completed periods
    pub total_paid: Money,
    pub total_interest: Money,
    /// number of payments handed to the engine
    pub payment_count: usize,
    /// payments outside every completed window
    pub unattributed_payments: usize,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    /// get period by 1-based number
    pub fn period(&self, number: u32) -> Option<&Period> {
        let index = number.checked_sub(1)?;
        self.periods.get(index as usize)
    }

    /// balance after the given period, or the principal if it does not exist
    pub fn balance_after(&self, number: u32) -> Money {
        self.period(number)
            .map(|p| p.balance)
            .unwrap_or(self.principal)
    }

    /// exclusive end of the last completed window
    pub fn last_period_end(&self) -> Option<NaiveDate> {
        self.periods.last().map(|p| p.end_date)
    }
}
