pub mod ledger;

pub use ledger::PaymentLedger;
