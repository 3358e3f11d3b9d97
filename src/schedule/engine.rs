use chrono::{Days, Local, NaiveDate};
use hourglass_rs::SafeTimeProvider;
use log::{debug, info, warn};

use crate::config::ScheduleConfig;
use crate::decimal::Money;
use crate::errors::{Result, ScheduleError};
use crate::schedule::Schedule;
use crate::types::{Payment, Period};

/// engine producing the window-by-window interest schedule
///
/// Time from the start date is cut into fixed windows. Each completed window
/// charges the flat rate on its opening balance, then deducts the payments
/// dated inside it. Interest is reported per window but never added to the
/// balance. A window is only emitted once its end date is strictly before
/// the calculation date.
#[derive(Debug, Clone, Default)]
pub struct ScheduleEngine {
    config: ScheduleConfig,
}

impl ScheduleEngine {
    pub fn new(config: ScheduleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// calculate the schedule as of the given date
    ///
    /// `payments` need not be sorted. A payment dated exactly on a window
    /// boundary belongs to the window starting on that date. Payments before
    /// `start_date` or inside the unfinished final window are not attributed.
    ///
    /// Returns [`ScheduleError::InvalidPrincipal`] if `principal` is not
    /// greater than zero.
    pub fn calculate(
        &self,
        principal: Money,
        start_date: NaiveDate,
        payments: &[Payment],
        as_of: NaiveDate,
    ) -> Result<Schedule> {
        if !principal.is_positive() {
            return Err(ScheduleError::InvalidPrincipal { amount: principal });
        }

        let window = Days::new(u64::from(self.config.window_days));
        let rate = self.config.rate_per_window;

        let mut ordered: Vec<&Payment> = payments.iter().collect();
        ordered.sort_by_key(|p| p.date);
        let mut cursor = ordered.partition_point(|p| p.date < start_date);

        let mut periods = Vec::new();
        let mut balance = principal;
        let mut paid_to_date = Money::ZERO;
        let mut total_interest = Money::ZERO;
        let mut attributed = 0usize;
        let mut window_start = start_date;

        while let Some(window_end) = window_start.checked_add_days(window) {
            if window_end >= as_of {
                break;
            }

            let opening_balance = balance;
            let interest = opening_balance
                .checked_apply_rate(rate)
                .ok_or(ScheduleError::AmountOverflow { context: "period interest" })?;

            let mut total_paid = Money::ZERO;
            let mut payment_count = 0u32;
            while let Some(payment) = ordered.get(cursor).filter(|p| p.date < window_end) {
                total_paid = total_paid
                    .checked_add(payment.amount)
                    .ok_or(ScheduleError::AmountOverflow { context: "period payments" })?;
                payment_count += 1;
                cursor += 1;
            }

            balance = balance
                .checked_sub(total_paid)
                .ok_or(ScheduleError::AmountOverflow { context: "balance" })?;
            paid_to_date = paid_to_date
                .checked_add(total_paid)
                .ok_or(ScheduleError::AmountOverflow { context: "total paid" })?;
            total_interest = total_interest
                .checked_add(interest)
                .ok_or(ScheduleError::AmountOverflow { context: "total interest" })?;
            attributed += payment_count as usize;

            let period = Period {
                number: periods.len() as u32 + 1,
                start_date: window_start,
                end_date: window_end,
                opening_balance,
                total_paid,
                payment_count,
                interest,
                balance,
            };
            debug!(
                "period {}: {} -> {} opening {} paid {} interest {} balance {}",
                period.number,
                period.start_date,
                period.end_date,
                period.opening_balance,
                period.total_paid,
                period.interest,
                period.balance
            );
            periods.push(period);

            window_start = window_end;
        }

        let unattributed_payments = payments.len() - attributed;
        if unattributed_payments > 0 {
            warn!(
                "{} payment(s) fall outside every completed {}-day window and were not applied",
                unattributed_payments, self.config.window_days
            );
        }

        info!(
            "schedule from {} as of {}: {} period(s), final balance {}",
            start_date,
            as_of,
            periods.len(),
            balance
        );

        Ok(Schedule {
            principal,
            start_date,
            as_of,
            window_days: self.config.window_days,
            rate_per_window: rate,
            periods,
            final_balance: balance,
            total_paid: paid_to_date,
            total_interest,
            payment_count: payments.len(),
            unattributed_payments,
        })
    }

    /// calculate the schedule as of today's local date from the time provider
    pub fn calculate_now(
        &self,
        principal: Money,
        start_date: NaiveDate,
        payments: &[Payment],
        time_provider: &SafeTimeProvider,
    ) -> Result<Schedule> {
        let today = time_provider.now().with_timezone(&Local).date_naive();
        self.calculate(principal, start_date, payments, today)
    }
}
