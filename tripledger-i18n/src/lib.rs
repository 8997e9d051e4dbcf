#[cfg(all(feature = "tr", feature = "en"))]
compile_error!("Cannot enable both 'tr' and 'en' features at the same time");

#[cfg(feature = "tr")]
pub mod strings {
    pub const CURRENCY: &str = "Para birimi";
    pub const TOTAL: &str = "Toplam";
    pub const PARTICIPANT: &str = "Kişi";
    pub const PAID: &str = "Ödenen";
    pub const FROM: &str = "Borçlu";
    pub const TO: &str = "Alacaklı";
    pub const AMOUNT: &str = "Tutar";
    pub const TOTALS_HEADING: &str = "Toplam harcama";
    pub const SPENT_BY_PERSON_HEADING: &str = "Kişi başı harcama";
    pub const DEBTS_HEADING: &str = "Borçlar";
    pub const ALL_SETTLED: &str = "Herkes ödeşti.";
    pub const NO_EXPENSES: &str = "Henüz harcama yok.";
}

#[cfg(not(feature = "tr"))]
pub mod strings {
    pub const CURRENCY: &str = "Currency";
    pub const TOTAL: &str = "Total";
    pub const PARTICIPANT: &str = "Participant";
    pub const PAID: &str = "Paid";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const TOTALS_HEADING: &str = "Total spend";
    pub const SPENT_BY_PERSON_HEADING: &str = "Spend per person";
    pub const DEBTS_HEADING: &str = "Debts";
    pub const ALL_SETTLED: &str = "Everyone is settled up.";
    pub const NO_EXPENSES: &str = "No expenses yet.";
}

pub use strings::*;

pub struct BudgetTitle<'a> {
    trip: Option<&'a str>,
    expense_count: usize,
}

pub fn budget_title(trip: Option<&str>, expense_count: usize) -> BudgetTitle<'_> {
    BudgetTitle {
        trip,
        expense_count,
    }
}

#[cfg(feature = "tr")]
impl std::fmt::Display for BudgetTitle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.trip {
            Some(trip) => write!(f, "Bütçe: {trip} ({} harcama)", self.expense_count),
            None => write!(f, "Bütçe: tüm geziler ({} harcama)", self.expense_count),
        }
    }
}

#[cfg(not(feature = "tr"))]
impl std::fmt::Display for BudgetTitle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let noun = if self.expense_count == 1 {
            "expense"
        } else {
            "expenses"
        };
        match self.trip {
            Some(trip) => write!(f, "Budget: {trip} ({} {noun})", self.expense_count),
            None => write!(f, "Budget: all trips ({} {noun})", self.expense_count),
        }
    }
}
