use proptest::prelude::*;
use tripledger_domain::{
    CurrencyCode, Expense, ExpenseId, Money, ParticipantId, ParticipantSet, SettlementPolicy,
    SettlementService, SplitMode, TripId,
};

const CURRENCIES: [&str; 3] = ["TRY", "EUR", "USD"];
const NAMES: [&str; 5] = ["zeynep", "bartu", "ada", "can", "deniz"];

fn code(value: &str) -> CurrencyCode {
    CurrencyCode::try_new(value).expect("valid code")
}

fn participants(member_count: usize) -> ParticipantSet {
    ParticipantSet::try_new(NAMES[..member_count].iter().map(|name| ParticipantId::new(*name)))
        .expect("valid participants")
}

fn build_expenses(member_count: usize, raw: &[(u32, usize, usize, bool)]) -> Vec<Expense> {
    raw.iter()
        .enumerate()
        .map(|(idx, &(cents, currency_idx, payer_idx, solo))| Expense {
            id: ExpenseId::new(format!("e{idx}")),
            trip_id: TripId::new("trip"),
            title: format!("expense {idx}"),
            amount: Money::new(i64::from(cents), 2),
            currency: code(CURRENCIES[currency_idx % CURRENCIES.len()]),
            category: None,
            paid_by: ParticipantId::new(NAMES[payer_idx % member_count]),
            split_mode: if solo { SplitMode::Solo } else { SplitMode::Equal },
            added_by: ParticipantId::new(NAMES[0]),
        })
        .collect()
}

fn raw_expenses() -> impl Strategy<Value = Vec<(u32, usize, usize, bool)>> {
    prop::collection::vec(
        (0u32..=100_000, 0usize..3, 0usize..5, any::<bool>()),
        0..=25,
    )
}

proptest! {
    #[test]
    fn settling_leaves_every_participant_at_their_share(
        member_count in 1usize..=5,
        raw in raw_expenses(),
    ) {
        let service = SettlementService::default();
        let participants = participants(member_count);
        let expenses = build_expenses(member_count, &raw);
        let debts = service.compute_debts(&expenses, &participants);

        // Nobody is left owing more than epsilon; a creditor can stay owed the
        // sub-epsilon shortfalls of everyone else.
        let dust = Money::new(1, 20);
        let owed_floor = -(SettlementPolicy::DEFAULT_EPSILON + dust);
        let credit_ceiling = Money::new(member_count as i64 - 1, 2) + dust;
        for currency in CURRENCIES.map(code) {
            let shared: Vec<&Expense> = expenses
                .iter()
                .filter(|expense| expense.is_shared() && expense.currency == currency)
                .collect();
            let total: Money = shared.iter().map(|expense| expense.amount).sum();
            let per_head = total.per_head(participants.count());

            for participant in participants.iter() {
                let paid: Money = shared
                    .iter()
                    .filter(|expense| &expense.paid_by == participant)
                    .map(|expense| expense.amount)
                    .sum();
                let sent: Money = debts
                    .iter()
                    .filter(|debt| debt.currency == currency && &debt.from == participant)
                    .map(|debt| debt.amount)
                    .sum();
                let received: Money = debts
                    .iter()
                    .filter(|debt| debt.currency == currency && &debt.to == participant)
                    .map(|debt| debt.amount)
                    .sum();
                let residual = paid + sent - received - per_head;
                prop_assert!(residual >= owed_floor, "{participant} still owes {residual}");
                prop_assert!(residual <= credit_ceiling, "{participant} still owed {residual}");
            }
        }
    }

    #[test]
    fn debts_are_positive_and_between_distinct_people(
        member_count in 1usize..=5,
        raw in raw_expenses(),
    ) {
        let service = SettlementService::default();
        let participants = participants(member_count);
        let expenses = build_expenses(member_count, &raw);

        for debt in service.compute_debts(&expenses, &participants) {
            prop_assert!(debt.amount > Money::ZERO);
            prop_assert_ne!(&debt.from, &debt.to);
            prop_assert!(participants.contains(&debt.from));
            prop_assert!(participants.contains(&debt.to));
        }
    }

    #[test]
    fn input_order_does_not_matter(
        member_count in 1usize..=5,
        raw in raw_expenses(),
    ) {
        let service = SettlementService::default();
        let participants = participants(member_count);
        let expenses = build_expenses(member_count, &raw);
        let mut reversed = expenses.clone();
        reversed.reverse();

        prop_assert_eq!(
            service.compute_totals(&expenses),
            service.compute_totals(&reversed)
        );
        prop_assert_eq!(
            service.compute_debts(&expenses, &participants),
            service.compute_debts(&reversed, &participants)
        );
    }

    #[test]
    fn solo_expenses_never_create_debts(
        member_count in 1usize..=5,
        raw in raw_expenses(),
    ) {
        let service = SettlementService::default();
        let participants = participants(member_count);
        let solo_only: Vec<_> = raw
            .into_iter()
            .map(|(cents, currency, payer, _)| (cents, currency, payer, true))
            .collect();
        let expenses = build_expenses(member_count, &solo_only);

        prop_assert!(service.compute_debts(&expenses, &participants).is_empty());

        let totals = service.compute_totals(&expenses);
        let overall: Money = expenses.iter().map(|expense| expense.amount).sum();
        let recorded: Money = totals.by_currency().values().sum();
        prop_assert_eq!(overall, recorded);
    }

    #[test]
    fn other_currencies_do_not_leak(
        member_count in 1usize..=5,
        raw in raw_expenses(),
        extra_cents in 1u32..=100_000,
    ) {
        let service = SettlementService::default();
        let participants = participants(member_count);
        let expenses = build_expenses(member_count, &raw);

        let mut with_gbp = expenses.clone();
        with_gbp.push(Expense {
            id: ExpenseId::new("gbp"),
            trip_id: TripId::new("trip"),
            title: "pounds".to_string(),
            amount: Money::new(i64::from(extra_cents), 2),
            currency: code("GBP"),
            category: None,
            paid_by: ParticipantId::new(NAMES[0]),
            split_mode: SplitMode::Equal,
            added_by: ParticipantId::new(NAMES[0]),
        });

        let before = service.compute_totals(&expenses);
        let after = service.compute_totals(&with_gbp);
        for currency in CURRENCIES.map(code) {
            prop_assert_eq!(before.total_for(&currency), after.total_for(&currency));
            for participant in participants.iter() {
                prop_assert_eq!(
                    before.paid_by(participant, &currency),
                    after.paid_by(participant, &currency)
                );
            }
        }

        let gbp = code("GBP");
        let debts_before = service.compute_debts(&expenses, &participants);
        let debts_after: Vec<_> = service
            .compute_debts(&with_gbp, &participants)
            .into_iter()
            .filter(|debt| debt.currency != gbp)
            .collect();
        prop_assert_eq!(debts_before, debts_after);
    }
}

#[test]
fn empty_expense_list_yields_nothing() {
    let service = SettlementService::default();
    let totals = service.compute_totals(&[]);
    assert!(totals.by_currency().is_empty());
    assert!(totals.by_person().is_empty());
    assert!(service.compute_debts(&[], &participants(2)).is_empty());
}
