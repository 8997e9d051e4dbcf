use crate::model::{CurrencyCode, Debt, Expense, Money, ParticipantId, ParticipantSet};
use fxhash::FxHashMap;
use std::collections::BTreeMap;

/// Tolerance used when deciding whether a net balance still needs settling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementPolicy {
    /// A participant owing at most `epsilon` is not asked to pay.
    pub epsilon: Money,
}

impl SettlementPolicy {
    /// One hundredth of the currency unit.
    pub const DEFAULT_EPSILON: Money = Money::from_parts(1, 2);

    pub fn with_epsilon(epsilon: Money) -> Self {
        Self {
            epsilon: epsilon.abs(),
        }
    }
}

impl Default for SettlementPolicy {
    fn default() -> Self {
        Self {
            epsilon: Self::DEFAULT_EPSILON,
        }
    }
}

/// Computes the transfers that equalize shared spending, one currency at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct DebtSettlement;

impl DebtSettlement {
    /// Settles every currency found among the equal-split expenses.
    ///
    /// Solo expenses are ignored. Currency groups are processed in ascending
    /// currency-code order, so the output does not depend on input order.
    pub fn settle(
        &self,
        expenses: &[Expense],
        participants: &ParticipantSet,
        policy: SettlementPolicy,
    ) -> Vec<Debt> {
        let mut groups: BTreeMap<&CurrencyCode, Vec<&Expense>> = BTreeMap::new();
        for expense in expenses.iter().filter(|expense| expense.is_shared()) {
            groups.entry(&expense.currency).or_default().push(expense);
        }

        let mut debts = Vec::new();
        for (currency, group) in groups {
            settle_currency(currency, &group, participants, policy, &mut debts);
        }
        debts
    }
}

fn settle_currency(
    currency: &CurrencyCode,
    group: &[&Expense],
    participants: &ParticipantSet,
    policy: SettlementPolicy,
    debts: &mut Vec<Debt>,
) {
    let mut paid: FxHashMap<&ParticipantId, Money> = participants
        .iter()
        .map(|participant| (participant, Money::ZERO))
        .collect();
    let mut total_shared = Money::ZERO;

    for expense in group {
        let Some(slot) = paid.get_mut(&expense.paid_by) else {
            tracing::warn!(
                expense_id = expense.id.as_str(),
                paid_by = %expense.paid_by,
                currency = %currency,
                amount = %expense.amount,
                "Shared expense paid by unknown participant excluded from settlement"
            );
            continue;
        };
        *slot += expense.amount;
        total_shared += expense.amount;
    }

    let per_head = total_shared.per_head(participants.count());
    let members: Vec<&ParticipantId> = participants.iter().collect();
    let mut nets: Vec<Money> = members
        .iter()
        .map(|member| paid.get(member).copied().unwrap_or(Money::ZERO) - per_head)
        .collect();

    let epsilon = policy.epsilon;
    let first_debt = debts.len();

    // A debtor picked below -epsilon keeps paying until its net reaches zero or
    // no creditor is left. Every step zeroes one net for good, so n steps suffice.
    let mut paying: Option<usize> = None;
    for _ in 0..members.len() {
        let Some(debtor) = paying.or_else(|| {
            largest_debtor(&nets)
                .filter(|&(_, net)| net < -epsilon)
                .map(|(idx, _)| idx)
        }) else {
            break;
        };
        let Some((creditor, creditor_net)) =
            largest_creditor(&nets).filter(|&(_, net)| net > Money::ZERO)
        else {
            break;
        };

        let amount = (-nets[debtor]).min(creditor_net);
        nets[debtor] += amount;
        nets[creditor] -= amount;
        paying = (nets[debtor] < Money::ZERO).then_some(debtor);
        debts.push(Debt {
            from: members[debtor].clone(),
            to: members[creditor].clone(),
            amount,
            currency: currency.clone(),
        });
    }

    tracing::debug!(
        currency = %currency,
        expense_count = group.len(),
        participant_count = members.len(),
        total_shared = %total_shared,
        per_head = %per_head,
        debt_count = debts.len() - first_debt,
        "Currency group settled"
    );
}

/// Most negative net balance; the earliest participant wins ties.
fn largest_debtor(nets: &[Money]) -> Option<(usize, Money)> {
    nets.iter()
        .copied()
        .enumerate()
        .min_by(|(lhs_idx, lhs), (rhs_idx, rhs)| lhs.cmp(rhs).then(lhs_idx.cmp(rhs_idx)))
}

/// Most positive net balance; the earliest participant wins ties.
fn largest_creditor(nets: &[Money]) -> Option<(usize, Money)> {
    nets.iter()
        .copied()
        .enumerate()
        .max_by(|(lhs_idx, lhs), (rhs_idx, rhs)| lhs.cmp(rhs).then(rhs_idx.cmp(lhs_idx)))
}
