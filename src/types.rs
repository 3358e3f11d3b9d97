use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{Result, ScheduleError};

/// unique identifier for a recorded payment
pub type PaymentId = Uuid;

/// a partial payment (EMI) made against the balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub date: NaiveDate,
    pub amount: Money,
}

impl Payment {
    /// record a payment; the amount must be strictly positive
    pub fn new(date: NaiveDate, amount: Money) -> Result<Self> {
        if !amount.is_positive() {
            return Err(ScheduleError::InvalidPaymentAmount { amount });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            date,
            amount,
        })
    }

    /// true when the payment falls inside the half-open window [start, end)
    pub fn falls_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date < end
    }
}

/// one completed interest window of the schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// 1-based position in the schedule
    pub number: u32,
    pub start_date: NaiveDate,
    /// exclusive; equals the next period's start
    pub end_date: NaiveDate,
    /// balance carried in from the previous period, interest is charged on this
    pub opening_balance: Money,
    pub total_paid: Money,
    pub payment_count: u32,
    pub interest: Money,
    /// opening balance less this period's payments; interest is never added back
    pub balance: Money,
}

impl Period {
    pub fn length_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
