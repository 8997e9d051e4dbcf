use indexmap::IndexSet;
use rust_decimal::Decimal;
use std::{
    collections::BTreeMap,
    fmt,
    iter::Sum,
    num::NonZeroUsize,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Upper bound accepted for a single expense amount, 10^15.
    pub const MAX_EXPENSE: Self = Self(Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0));

    /// `Money::new(1250, 2)` is 12.50.
    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    /// Const-evaluable counterpart of [`Money::new`] for small non-negative amounts.
    pub(crate) const fn from_parts(units: u32, scale: u32) -> Self {
        Self(Decimal::from_parts(units, 0, 0, false, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Splits the amount evenly across `count` heads. Exact up to decimal precision.
    pub fn per_head(self, count: NonZeroUsize) -> Self {
        Self(self.0 / Decimal::from(count.get()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyCodeError {
    #[error("currency code is empty")]
    Empty,
    #[error("currency code '{0}' must be ASCII alphanumeric")]
    InvalidCharacters(String),
}

/// Short currency identifier such as `TRY` or `EUR`, stored upper case.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn try_new(code: &str) -> Result<Self, CurrencyCodeError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(CurrencyCodeError::Empty);
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CurrencyCodeError::InvalidCharacters(code.to_owned()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TripId(String);

impl TripId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SplitMode {
    /// Shared cost, factored into debts.
    #[default]
    Equal,
    /// Borne by the payer alone; counted in totals only.
    Solo,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub id: ExpenseId,
    pub trip_id: TripId,
    pub title: String,
    /// Non-negative and at most [`Money::MAX_EXPENSE`].
    pub amount: Money,
    pub currency: CurrencyCode,
    pub category: Option<String>,
    pub paid_by: ParticipantId,
    pub split_mode: SplitMode,
    pub added_by: ParticipantId,
}

impl Expense {
    pub fn is_shared(&self) -> bool {
        self.split_mode == SplitMode::Equal
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParticipantSetError {
    #[error("participant set must not be empty")]
    Empty,
    #[error("participant '{0}' is listed more than once")]
    Duplicate(ParticipantId),
}

/// Ordered, duplicate-free, non-empty list of the people who can owe or be owed.
///
/// The order is the tie-break order used during settlement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantSet {
    members: IndexSet<ParticipantId>,
}

impl ParticipantSet {
    pub fn try_new<I>(members: I) -> Result<Self, ParticipantSetError>
    where
        I: IntoIterator<Item = ParticipantId>,
    {
        let mut set = IndexSet::new();
        for member in members {
            if set.contains(&member) {
                return Err(ParticipantSetError::Duplicate(member));
            }
            set.insert(member);
        }
        if set.is_empty() {
            return Err(ParticipantSetError::Empty);
        }
        Ok(Self { members: set })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticipantId> + '_ {
        self.members.iter()
    }

    pub fn count(&self) -> NonZeroUsize {
        // Construction rejects empty sets.
        NonZeroUsize::new(self.members.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn contains(&self, participant: &ParticipantId) -> bool {
        self.members.contains(participant)
    }
}

/// Directed transfer that moves the group closer to zero net balances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debt {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Money,
    pub currency: CurrencyCode,
}

pub type CurrencyTotals = BTreeMap<CurrencyCode, Money>;

/// Spend per currency and per payer. Missing keys read as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseTotals {
    by_currency: CurrencyTotals,
    by_person: BTreeMap<ParticipantId, CurrencyTotals>,
}

impl ExpenseTotals {
    pub fn record(&mut self, expense: &Expense) {
        *self
            .by_currency
            .entry(expense.currency.clone())
            .or_insert(Money::ZERO) += expense.amount;
        *self
            .by_person
            .entry(expense.paid_by.clone())
            .or_default()
            .entry(expense.currency.clone())
            .or_insert(Money::ZERO) += expense.amount;
    }

    pub fn total_for(&self, currency: &CurrencyCode) -> Money {
        self.by_currency.get(currency).copied().unwrap_or(Money::ZERO)
    }

    pub fn paid_by(&self, participant: &ParticipantId, currency: &CurrencyCode) -> Money {
        self.by_person
            .get(participant)
            .and_then(|totals| totals.get(currency))
            .copied()
            .unwrap_or(Money::ZERO)
    }

    pub fn by_currency(&self) -> &CurrencyTotals {
        &self.by_currency
    }

    pub fn by_person(&self) -> &BTreeMap<ParticipantId, CurrencyTotals> {
        &self.by_person
    }

    pub fn is_empty(&self) -> bool {
        self.by_currency.is_empty()
    }
}
