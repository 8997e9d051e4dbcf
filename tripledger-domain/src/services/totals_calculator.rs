use crate::model::{Expense, ExpenseTotals};

/// Aggregates spend per currency and per payer, regardless of split mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct TotalsCalculator;

impl TotalsCalculator {
    pub fn calculate(&self, expenses: &[Expense]) -> ExpenseTotals {
        let mut totals = ExpenseTotals::default();
        for expense in expenses {
            totals.record(expense);
        }
        totals
    }
}
