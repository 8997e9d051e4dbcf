use rust_decimal::Decimal;
use std::{env, str::FromStr};
use thiserror::Error;
use tripledger_domain::{Money, ParticipantId, SettlementPolicy};

pub const PARTICIPANTS_VAR: &str = "TRIPLEDGER_PARTICIPANTS";
pub const EPSILON_VAR: &str = "TRIPLEDGER_EPSILON";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TRIPLEDGER_EPSILON must be a decimal number, got '{0}'")]
    InvalidEpsilon(String),
    #[error("TRIPLEDGER_PARTICIPANTS is set but lists nobody")]
    EmptyParticipants,
}

/// Runtime settings read from the environment (and `.env`, if present).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Overrides the participant list declared in the expense file.
    pub participants: Option<Vec<ParticipantId>>,
    pub epsilon: Option<Money>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let participants = match lookup(PARTICIPANTS_VAR) {
            Some(raw) => {
                let names: Vec<ParticipantId> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(ParticipantId::new)
                    .collect();
                if names.is_empty() {
                    return Err(ConfigError::EmptyParticipants);
                }
                Some(names)
            }
            None => None,
        };

        let epsilon = match lookup(EPSILON_VAR) {
            Some(raw) => {
                let value = Decimal::from_str(raw.trim())
                    .map_err(|_| ConfigError::InvalidEpsilon(raw.clone()))?;
                Some(Money::from_decimal(value))
            }
            None => None,
        };

        Ok(Self {
            participants,
            epsilon,
        })
    }

    pub fn settlement_policy(&self) -> SettlementPolicy {
        self.epsilon
            .map(SettlementPolicy::with_epsilon)
            .unwrap_or_default()
    }
}
