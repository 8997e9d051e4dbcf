#![warn(clippy::uninlined_format_args)]

pub mod budget_presenter;
pub mod text_table;

pub use budget_presenter::{BudgetPresenter, BudgetView, format_amount};
