pub mod config;
pub mod decimal;
pub mod errors;
pub mod payments;
pub mod report;
pub mod schedule;
pub mod types;
pub mod validation;

// re-export key types
pub use config::{CalculatorConfig, ReportConfig, ScheduleConfig};
pub use decimal::{Money, Rate};
pub use errors::{Result, ScheduleError};
pub use payments::PaymentLedger;
pub use report::{Layout, ReportDocument, ScheduleSummary, ScheduleView};
pub use schedule::{Schedule, ScheduleEngine};
pub use types::{Payment, PaymentId, Period};
pub use validation::{DateFields, ValidationError};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
