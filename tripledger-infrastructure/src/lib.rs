#![warn(clippy::uninlined_format_args)]

pub mod config;
pub mod expense_file;

pub use config::{AppConfig, ConfigError};
pub use expense_file::{ExpenseFileError, JsonExpenseFile};
