use thiserror::Error;
use tripledger_domain::TripId;

#[derive(Debug, Error)]
pub enum ExpenseSourceError {
    #[error("expenses for trip '{0}' are unavailable")]
    Unavailable(TripId),
    #[error("failed to read expenses: {0}")]
    Read(String),
}

#[derive(Debug, Error)]
pub enum BudgetError {
    #[error(transparent)]
    Source(#[from] ExpenseSourceError),
}
