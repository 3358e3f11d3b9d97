use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{Result, ScheduleError};
use crate::types::{Payment, PaymentId};

/// caller-owned list of recorded payments
///
/// Payments are kept in insertion order. The engine does not need them
/// sorted; `sorted` gives the chronological view used for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentLedger {
    payments: Vec<Payment>,
}

impl PaymentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// record a new payment and return its id
    pub fn add(&mut self, date: NaiveDate, amount: Money) -> Result<PaymentId> {
        let payment = Payment::new(date, amount)?;
        let id = payment.id;
        self.push(payment);
        Ok(id)
    }

    pub fn push(&mut self, payment: Payment) {
        debug!("payment recorded: {} on {}", payment.amount, payment.date);
        self.payments.push(payment);
    }

    /// remove a payment by id
    pub fn remove(&mut self, id: PaymentId) -> Result<Payment> {
        let index = self
            .payments
            .iter()
            .position(|p| p.id == id)
            .ok_or(ScheduleError::PaymentNotFound { id })?;
        let removed = self.payments.remove(index);
        debug!("payment removed: {} on {}", removed.amount, removed.date);
        Ok(removed)
    }

    pub fn get(&self, id: PaymentId) -> Option<&Payment> {
        self.payments.iter().find(|p| p.id == id)
    }

    pub fn clear(&mut self) {
        self.payments.clear();
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    pub fn as_slice(&self) -> &[Payment] {
        &self.payments
    }

    /// payments ordered by date; equal dates keep insertion order
    pub fn sorted(&self) -> Vec<&Payment> {
        let mut sorted: Vec<&Payment> = self.payments.iter().collect();
        sorted.sort_by_key(|p| p.date);
        sorted
    }

    /// sum of all recorded amounts, whether or not a schedule attributes them
    pub fn total(&self) -> Result<Money> {
        self.payments
            .iter()
            .try_fold(Money::ZERO, |acc, p| acc.checked_add(p.amount))
            .ok_or(ScheduleError::AmountOverflow {
                context: "ledger total",
            })
    }
}

impl FromIterator<Payment> for PaymentLedger {
    fn from_iter<I: IntoIterator<Item = Payment>>(iter: I) -> Self {
        Self {
            payments: iter.into_iter().collect(),
        }
    }
}
