use crate::error::ExpenseSourceError;
use tripledger_domain::{Expense, TripId};

/// Read access to recorded expenses.
///
/// Implementations may return entries of other trips; the processor filters them.
pub trait ExpenseSource: Send + Sync {
    fn expenses(&self, trip_id: &TripId) -> Result<Vec<Expense>, ExpenseSourceError>;

    /// Every expense the source knows about, regardless of trip.
    fn all_expenses(&self) -> Result<Vec<Expense>, ExpenseSourceError>;
}
