#![warn(clippy::uninlined_format_args)]

pub mod budget_processor;
pub mod error;
pub mod model;
pub mod ports;

pub use budget_processor::BudgetProcessor;
pub use error::{BudgetError, ExpenseSourceError};
pub use model::BudgetSummary;
pub use ports::ExpenseSource;
