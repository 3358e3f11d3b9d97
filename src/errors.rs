use thiserror::Error;

use crate::decimal::Money;
use crate::types::PaymentId;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("invalid principal: {amount} (must be greater than zero)")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("invalid payment amount: {amount}")]
    InvalidPaymentAmount {
        amount: Money,
    },

    #[error("payment not found: {id}")]
    PaymentNotFound {
        id: PaymentId,
    },

    #[error("amount overflow while computing {context}")]
    AmountOverflow {
        context: &'static str,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("schedule has no completed periods to export")]
    EmptySchedule,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
