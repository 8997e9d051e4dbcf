#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    CurrencyCode, CurrencyCodeError, CurrencyTotals, Debt, Expense, ExpenseId, ExpenseTotals,
    Money, ParticipantId, ParticipantSet, ParticipantSetError, SplitMode, TripId,
};
pub use services::{DebtSettlement, SettlementPolicy, SettlementService, TotalsCalculator};
