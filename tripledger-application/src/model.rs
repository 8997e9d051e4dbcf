use tripledger_domain::{Debt, ExpenseTotals, TripId};

/// Derived budget view of a trip. Recomputed on demand, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BudgetSummary {
    /// `None` when the summary spans every trip in the source.
    pub trip_id: Option<TripId>,
    pub expense_count: usize,
    pub totals: ExpenseTotals,
    pub debts: Vec<Debt>,
}

impl BudgetSummary {
    pub fn is_settled(&self) -> bool {
        self.debts.is_empty()
    }
}
