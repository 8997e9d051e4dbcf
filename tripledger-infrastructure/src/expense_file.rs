use rust_decimal::Decimal;
use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error;
use tripledger_application::{ExpenseSource, ExpenseSourceError};
use tripledger_domain::{
    CurrencyCode, CurrencyCodeError, Expense, ExpenseId, Money, ParticipantId, SplitMode, TripId,
};

#[derive(Debug, Error)]
pub enum ExpenseFileError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid expense document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expense '{id}' has a negative amount")]
    NegativeAmount { id: String },
    #[error("expense '{id}' has an amount above {max}")]
    AmountTooLarge { id: String, max: Money },
    #[error("expense '{id}': {source}")]
    Currency {
        id: String,
        #[source]
        source: CurrencyCodeError,
    },
}

#[derive(Deserialize)]
struct ExpenseDocument {
    #[serde(default)]
    participants: Vec<String>,
    #[serde(default)]
    expenses: Vec<ExpenseRecord>,
}

#[derive(Deserialize)]
struct ExpenseRecord {
    id: String,
    trip_id: String,
    #[serde(default)]
    title: String,
    amount: Decimal,
    currency: String,
    #[serde(default)]
    category: Option<String>,
    paid_by: String,
    #[serde(default)]
    split_mode: SplitModeRecord,
    #[serde(default)]
    added_by: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "lowercase")]
enum SplitModeRecord {
    #[default]
    Equal,
    Solo,
}

impl From<SplitModeRecord> for SplitMode {
    fn from(record: SplitModeRecord) -> Self {
        match record {
            SplitModeRecord::Equal => SplitMode::Equal,
            SplitModeRecord::Solo => SplitMode::Solo,
        }
    }
}

impl TryFrom<ExpenseRecord> for Expense {
    type Error = ExpenseFileError;

    fn try_from(record: ExpenseRecord) -> Result<Self, Self::Error> {
        let amount = Money::from_decimal(record.amount);
        if amount.is_negative() {
            return Err(ExpenseFileError::NegativeAmount { id: record.id });
        }
        if amount > Money::MAX_EXPENSE {
            return Err(ExpenseFileError::AmountTooLarge {
                id: record.id,
                max: Money::MAX_EXPENSE,
            });
        }
        let currency = match CurrencyCode::try_new(&record.currency) {
            Ok(currency) => currency,
            Err(source) => {
                return Err(ExpenseFileError::Currency {
                    id: record.id,
                    source,
                });
            }
        };
        let paid_by = ParticipantId::new(record.paid_by);
        let added_by = record
            .added_by
            .map(ParticipantId::new)
            .unwrap_or_else(|| paid_by.clone());

        Ok(Expense {
            id: ExpenseId::new(record.id),
            trip_id: TripId::new(record.trip_id),
            title: record.title,
            amount,
            currency,
            category: record.category,
            paid_by,
            split_mode: record.split_mode.into(),
            added_by,
        })
    }
}

/// Expense snapshot exported from the trip backend as a JSON document.
///
/// ```json
/// {
///   "participants": ["zeynep", "bartu"],
///   "expenses": [
///     { "id": "e1", "trip_id": "istanbul", "title": "Ferry", "amount": "12.50",
///       "currency": "TRY", "paid_by": "zeynep", "split_mode": "equal" }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct JsonExpenseFile {
    participants: Vec<ParticipantId>,
    expenses: Vec<Expense>,
}

impl JsonExpenseFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ExpenseFileError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ExpenseFileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let file = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            participant_count = file.participants.len(),
            expense_count = file.expenses.len(),
            "Loaded expense file"
        );
        Ok(file)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ExpenseFileError> {
        let document: ExpenseDocument = serde_json::from_str(content)?;
        let expenses = document
            .expenses
            .into_iter()
            .map(Expense::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let participants = document
            .participants
            .into_iter()
            .map(ParticipantId::new)
            .collect();

        Ok(Self {
            participants,
            expenses,
        })
    }

    /// Participants declared in the document, in declaration order.
    pub fn participants(&self) -> &[ParticipantId] {
        &self.participants
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }
}

impl ExpenseSource for JsonExpenseFile {
    fn expenses(&self, trip_id: &TripId) -> Result<Vec<Expense>, ExpenseSourceError> {
        Ok(self
            .expenses
            .iter()
            .filter(|expense| &expense.trip_id == trip_id)
            .cloned()
            .collect())
    }

    fn all_expenses(&self) -> Result<Vec<Expense>, ExpenseSourceError> {
        Ok(self.expenses.clone())
    }
}
