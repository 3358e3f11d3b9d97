pub mod document;
pub mod format;
pub mod view;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::schedule::Schedule;

pub use document::{Page, ReportDocument};
pub use format::{format_currency, format_date, format_inr, format_range};
pub use view::ScheduleView;

/// totals shown above the period breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_paid: Money,
    pub total_interest: Money,
    pub final_balance: Money,
    pub period_count: usize,
}

impl ScheduleSummary {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            total_paid: schedule.total_paid,
            total_interest: schedule.total_interest,
            final_balance: schedule.final_balance,
            period_count: schedule.period_count(),
        }
    }
}

/// terminal layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// one row per period
    #[default]
    Table,
    /// stacked cards, for narrow terminals
    Cards,
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Layout::Table),
            "cards" => Ok(Layout::Cards),
            other => Err(format!("unknown layout '{}', expected table or cards", other)),
        }
    }
}

/// message shown instead of a breakdown when no window has completed
pub fn empty_state_message(window_days: u32) -> String {
    format!(
        "No completed {}-day periods yet. Select an earlier First Date or add EMIs.",
        window_days
    )
}

/// render the schedule for a terminal
pub fn render_text(schedule: &Schedule, symbol: &str, layout: Layout) -> String {
    if schedule.is_empty() {
        return empty_state_message(schedule.window_days);
    }

    let summary = ScheduleSummary::from_schedule(schedule);
    let money = |m: Money| format_currency(symbol, m);

    let mut lines = vec![
        format!("{:<16}{}", "Total Paid", money(summary.total_paid)),
        format!("{:<16}{}", "Total Interest", money(summary.total_interest)),
        format!("{:<16}{}", "Final Balance", money(summary.final_balance)),
        String::new(),
    ];

    match layout {
        Layout::Table => {
            let rows: Vec<[String; 4]> = schedule
                .periods
                .iter()
                .map(|p| {
                    [
                        format_range(p.start_date, p.end_date),
                        money(p.total_paid),
                        money(p.interest),
                        money(p.balance),
                    ]
                })
                .collect();

            let labels = ["Period", "Paid", "Interest", "Balance"];
            let mut widths = labels.map(|h| h.chars().count());
            for row in &rows {
                for (width, cell) in widths.iter_mut().zip(row) {
                    *width = (*width).max(cell.chars().count());
                }
            }

            let table_row = |cells: &[String; 4]| {
                format!(
                    "{:<w0$}  {:>w1$}  {:>w2$}  {:>w3$}",
                    cells[0],
                    cells[1],
                    cells[2],
                    cells[3],
                    w0 = widths[0],
                    w1 = widths[1],
                    w2 = widths[2],
                    w3 = widths[3]
                )
            };

            lines.push(table_row(&labels.map(String::from)));
            lines.push("-".repeat(widths.iter().sum::<usize>() + 6));
            lines.extend(rows.iter().map(table_row));
        }
        Layout::Cards => {
            for period in &schedule.periods {
                lines.push(format_range(period.start_date, period.end_date));
                lines.push(format!("  Paid: {}", money(period.total_paid)));
                lines.push(format!("  Interest: {}", money(period.interest)));
                lines.push(format!("  Balance: {}", money(period.balance)));
                lines.push(String::new());
            }
        }
    }

    let mut footer = format!("{} periods calculated.", summary.period_count);
    if schedule.unattributed_payments > 0 {
        footer.push_str(&format!(
            " {} EMI(s) fall outside the completed periods and are not included.",
            schedule.unattributed_payments
        ));
    }
    lines.push(String::new());
    lines.push(footer);

    lines.join("\n")
}
