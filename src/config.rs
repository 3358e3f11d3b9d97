use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{Result, ScheduleError};

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CalculatorConfig {
    pub schedule: ScheduleConfig,
    pub report: ReportConfig,
}

/// interest window configuration
///
/// Interest is flat and simple: `rate_per_window` of the opening balance is
/// charged once per window and never capitalised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub window_days: u32,
    pub rate_per_window: Rate,
}

/// document export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub title: String,
    pub currency_symbol: String,
    /// table rows before a page break
    pub rows_per_page: usize,
    pub file_stem: String,
}

impl ScheduleConfig {
    /// 1% every 28 days
    pub fn standard() -> Self {
        Self {
            window_days: 28,
            rate_per_window: Rate::from_percentage(1),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_days == 0 {
            return Err(ScheduleError::InvalidConfiguration {
                message: "window_days must be at least 1".to_string(),
            });
        }
        if self.rate_per_window.is_negative() {
            return Err(ScheduleError::InvalidConfiguration {
                message: format!("rate_per_window must not be negative, got {}", self.rate_per_window),
            });
        }
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl ReportConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows_per_page == 0 {
            return Err(ScheduleError::InvalidConfiguration {
                message: "rows_per_page must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Interest Calculator Report".to_string(),
            currency_symbol: "Rs.".to_string(),
            rows_per_page: 30,
            file_stem: "Interest_Report".to_string(),
        }
    }
}

impl CalculatorConfig {
    /// parse and validate a json configuration; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        self.schedule.validate()?;
        self.report.validate()
    }
}
