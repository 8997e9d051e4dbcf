use crate::{
    model::{Debt, Expense, ExpenseTotals, ParticipantSet},
    services::{DebtSettlement, SettlementPolicy, TotalsCalculator},
};

/// Entry point for the budget view: spend totals and the debts that settle them.
///
/// Holds no state besides the policy, so it can be recomputed on every change
/// to the expense list.
#[derive(Clone, Copy, Debug, Default)]
pub struct SettlementService {
    policy: SettlementPolicy,
}

impl SettlementService {
    pub fn new(policy: SettlementPolicy) -> Self {
        Self { policy }
    }

    pub fn compute_totals(&self, expenses: &[Expense]) -> ExpenseTotals {
        TotalsCalculator.calculate(expenses)
    }

    pub fn compute_debts(&self, expenses: &[Expense], participants: &ParticipantSet) -> Vec<Debt> {
        DebtSettlement.settle(expenses, participants, self.policy)
    }
}
