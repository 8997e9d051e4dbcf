pub mod debt_settlement;
pub mod settlement_service;
pub mod totals_calculator;

pub use debt_settlement::{DebtSettlement, SettlementPolicy};
pub use settlement_service::SettlementService;
pub use totals_calculator::TotalsCalculator;
