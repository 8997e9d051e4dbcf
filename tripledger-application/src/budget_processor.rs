use crate::{error::BudgetError, model::BudgetSummary, ports::ExpenseSource};
use tripledger_domain::{Expense, ParticipantSet, SettlementService, TripId};

#[derive(Clone, Copy)]
pub struct BudgetProcessor<'a> {
    source: &'a dyn ExpenseSource,
    participants: &'a ParticipantSet,
    service: SettlementService,
}

impl<'a> BudgetProcessor<'a> {
    pub fn new(
        source: &'a dyn ExpenseSource,
        participants: &'a ParticipantSet,
        service: SettlementService,
    ) -> Self {
        Self {
            source,
            participants,
            service,
        }
    }

    /// Loads the expenses of `trip_id` and builds its budget view.
    pub fn summarize_trip(&self, trip_id: &TripId) -> Result<BudgetSummary, BudgetError> {
        let mut expenses = self.source.expenses(trip_id)?;

        let fetched = expenses.len();
        expenses.retain(|expense| &expense.trip_id == trip_id);
        if expenses.len() != fetched {
            tracing::debug!(
                trip_id = %trip_id,
                dropped = fetched - expenses.len(),
                "Dropped expenses belonging to other trips"
            );
        }

        let mut summary = self.summarize_expenses(&expenses);
        summary.trip_id = Some(trip_id.clone());
        Ok(summary)
    }

    /// Builds one budget view across every expense the source holds.
    pub fn summarize_all(&self) -> Result<BudgetSummary, BudgetError> {
        let expenses = self.source.all_expenses()?;
        Ok(self.summarize_expenses(&expenses))
    }

    pub fn summarize_expenses(&self, expenses: &[Expense]) -> BudgetSummary {
        let totals = self.service.compute_totals(expenses);
        let debts = self.service.compute_debts(expenses, self.participants);

        tracing::debug!(
            expense_count = expenses.len(),
            currency_count = totals.by_currency().len(),
            debt_count = debts.len(),
            "Budget summary computed"
        );

        BudgetSummary {
            trip_id: None,
            expense_count: expenses.len(),
            totals,
            debts,
        }
    }
}
