use crate::text_table::{Alignment, TextTableBuilder};
use rust_decimal::RoundingStrategy;
use std::{borrow::Cow, fmt};
use tripledger_application::BudgetSummary;
use tripledger_domain::{CurrencyCode, Debt, Money, ParticipantId, ParticipantSet};
use tripledger_i18n as i18n;

const DISPLAY_SCALE: u32 = 2;

pub struct BudgetPresenter;

pub struct BudgetView {
    pub title: String,
    pub totals_table: Option<String>,
    pub per_person_table: Option<String>,
    pub debts_table: Option<String>,
}

impl BudgetPresenter {
    pub fn render(summary: &BudgetSummary, participants: &ParticipantSet) -> BudgetView {
        let title = i18n::budget_title(
            summary.trip_id.as_ref().map(|trip| trip.as_str()),
            summary.expense_count,
        )
        .to_string();

        if summary.totals.is_empty() {
            return BudgetView {
                title,
                totals_table: None,
                per_person_table: None,
                debts_table: None,
            };
        }

        BudgetView {
            title,
            totals_table: Some(Self::build_totals_table(summary)),
            per_person_table: Some(Self::build_per_person_table(summary, participants)),
            debts_table: (!summary.debts.is_empty())
                .then(|| Self::build_debts_table(&summary.debts)),
        }
    }

    pub fn build_totals_table(summary: &BudgetSummary) -> String {
        let headers = [Cow::Borrowed(i18n::CURRENCY), Cow::Borrowed(i18n::TOTAL)];
        TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&headers)
            .rows(
                summary
                    .totals
                    .by_currency()
                    .iter()
                    .map(|(currency, total)| {
                        [
                            Cow::Owned(currency.to_string()),
                            Cow::Owned(format_amount(*total, currency)),
                        ]
                    }),
            )
            .build()
    }

    /// One row per participant and currency, zero rows included; payers outside
    /// the participant set follow in name order.
    pub fn build_per_person_table(
        summary: &BudgetSummary,
        participants: &ParticipantSet,
    ) -> String {
        let headers = [
            Cow::Borrowed(i18n::PARTICIPANT),
            Cow::Borrowed(i18n::CURRENCY),
            Cow::Borrowed(i18n::PAID),
        ];
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&headers);

        let outsiders = summary
            .totals
            .by_person()
            .keys()
            .filter(|payer| !participants.contains(payer));
        let people: Vec<&ParticipantId> = participants.iter().chain(outsiders).collect();

        for person in people {
            for currency in summary.totals.by_currency().keys() {
                let paid = summary.totals.paid_by(person, currency);
                builder = builder.row([
                    Cow::Owned(person.to_string()),
                    Cow::Owned(currency.to_string()),
                    Cow::Owned(format_amount(paid, currency)),
                ]);
            }
        }

        builder.build()
    }

    pub fn build_debts_table(debts: &[Debt]) -> String {
        let headers = [
            Cow::Borrowed(i18n::FROM),
            Cow::Borrowed(i18n::TO),
            Cow::Borrowed(i18n::AMOUNT),
        ];
        TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&headers)
            .rows(debts.iter().map(|debt| {
                [
                    Cow::Owned(debt.from.to_string()),
                    Cow::Owned(debt.to.to_string()),
                    Cow::Owned(format_amount(debt.amount, &debt.currency)),
                ]
            }))
            .build()
    }
}

impl fmt::Display for BudgetView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        let (Some(totals), Some(per_person)) = (&self.totals_table, &self.per_person_table) else {
            return writeln!(f, "{}", i18n::NO_EXPENSES);
        };

        writeln!(f)?;
        writeln!(f, "{}", i18n::TOTALS_HEADING)?;
        write!(f, "{totals}")?;
        writeln!(f)?;
        writeln!(f, "{}", i18n::SPENT_BY_PERSON_HEADING)?;
        write!(f, "{per_person}")?;
        writeln!(f)?;
        writeln!(f, "{}", i18n::DEBTS_HEADING)?;
        match &self.debts_table {
            Some(debts) => write!(f, "{debts}"),
            None => writeln!(f, "{}", i18n::ALL_SETTLED),
        }
    }
}

/// Rounds half away from zero to two fractional digits, e.g. `12.50 TRY`.
pub fn format_amount(amount: Money, currency: &CurrencyCode) -> String {
    let mut rounded = amount
        .as_decimal()
        .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_SCALE);
    format!("{rounded} {currency}")
}
