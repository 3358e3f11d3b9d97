use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use log::info;

use crate::config::ReportConfig;
use crate::decimal::Money;
use crate::errors::{Result, ScheduleError};
use crate::report::format::{format_currency, format_date, format_range};
use crate::report::ScheduleSummary;
use crate::schedule::Schedule;

const PERIOD_WIDTH: usize = 27;
const AMOUNT_WIDTH: usize = 18;

/// one page of the exported report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub lines: Vec<String>,
}

/// paginated plain-text report of a schedule
///
/// The first page carries the header, the initial setup and the summary,
/// then the period table starts. A page holds at most `rows_per_page` table
/// rows; continuation pages repeat the table header. Every page ends with a
/// `Page i of n` footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pages: Vec<Page>,
    file_stem: String,
    generated_on: NaiveDate,
}

impl ReportDocument {
    pub fn build(
        schedule: &Schedule,
        config: &ReportConfig,
        generated_at: DateTime<Utc>,
    ) -> Result<Self> {
        config.validate()?;
        if schedule.is_empty() {
            return Err(ScheduleError::EmptySchedule);
        }

        let symbol = config.currency_symbol.as_str();
        let summary = ScheduleSummary::from_schedule(schedule);
        let mut lines = vec![
            config.title.clone(),
            format!("Generated on: {}", generated_at.format("%d/%m/%Y, %H:%M:%S UTC")),
            String::new(),
            "Initial Setup".to_string(),
            format!("  Initial Amount: {}", format_currency(symbol, schedule.principal)),
            format!("  First Date: {}", format_date(schedule.start_date)),
            format!("  Number of EMIs: {}", schedule.payment_count),
            String::new(),
            "Summary".to_string(),
            format!("  Total Paid: {}", format_currency(symbol, summary.total_paid)),
            format!("  Total Interest: {}", format_currency(symbol, summary.total_interest)),
            format!("  Final Balance: {}", format_currency(symbol, summary.final_balance)),
            String::new(),
            "Period-wise Breakdown".to_string(),
        ];
        lines.extend(table_header());

        let mut pages = Vec::new();
        let mut rows_on_page = 0;
        for period in &schedule.periods {
            if rows_on_page == config.rows_per_page {
                pages.push(Page {
                    number: pages.len() + 1,
                    lines: std::mem::take(&mut lines),
                });
                lines.extend(table_header());
                rows_on_page = 0;
            }

            lines.push(table_row(
                &format_range(period.start_date, period.end_date),
                symbol,
                [period.total_paid, period.interest, period.balance],
            ));
            rows_on_page += 1;
        }
        pages.push(Page {
            number: pages.len() + 1,
            lines,
        });

        Ok(Self {
            pages,
            file_stem: config.file_stem.clone(),
            generated_on: generated_at.date_naive(),
        })
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// full text with footers; pages are separated by form feeds
    pub fn render(&self) -> String {
        let total = self.pages.len();
        self.pages
            .iter()
            .map(|page| {
                let mut text = page.lines.join("\n");
                text.push_str(&format!("\n\nPage {} of {}\n", page.number, total));
                text
            })
            .collect::<Vec<_>>()
            .join("\u{000C}")
    }

    /// e.g. `Interest_Report_2025-03-15.txt`
    pub fn file_name(&self) -> String {
        format!("{}_{}.txt", self.file_stem, self.generated_on.format("%Y-%m-%d"))
    }

    /// write the rendered report into `dir` and return the file path
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(self.file_name());
        std::fs::write(&path, self.render())?;
        info!("report written to {} ({} page(s))", path.display(), self.page_count());
        Ok(path)
    }
}

fn table_header() -> [String; 2] {
    let header = format!(
        "{:<pw$}{:>aw$}{:>aw$}{:>aw$}",
        "Period",
        "Paid",
        "Interest",
        "Balance",
        pw = PERIOD_WIDTH,
        aw = AMOUNT_WIDTH
    );
    let rule = "-".repeat(PERIOD_WIDTH + 3 * AMOUNT_WIDTH);
    [header, rule]
}

fn table_row(period: &str, symbol: &str, amounts: [Money; 3]) -> String {
    let [paid, interest, balance] = amounts.map(|m| format_currency(symbol, m));
    format!(
        "{:<pw$}{:>aw$}{:>aw$}{:>aw$}",
        period,
        paid,
        interest,
        balance,
        pw = PERIOD_WIDTH,
        aw = AMOUNT_WIDTH
    )
}
