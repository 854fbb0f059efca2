//! Synthetic transaction generation.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and its CSV row layout
//! - The generator that fills transactions with random but plausible data
//! - The CSV serializer and the route handler that serves it

mod count;
mod csv;
mod endpoint;
mod generator;
mod models;

pub use count::TransactionCount;
pub use self::csv::to_csv;
pub use endpoint::{GenerateQuery, get_transactions_csv};
pub use generator::{
    EARLIEST_POST_DATE, FISCAL_YEAR_COUNT, GENERAL_AMOUNTS, PAYROLL_AMOUNTS, TransactionGenerator,
};
pub use models::{PerformancePeriod, Transaction};
