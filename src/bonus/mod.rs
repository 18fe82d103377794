pub mod engine;
mod errors;
pub mod ledger;
pub mod weights;

pub use engine::{BonusRulesEngine, BonusSummary, TeamCreditPolicy};
pub use errors::{ConfigurationError, UnresolvedReason, UnresolvedRoleError};
pub use ledger::CreditLedger;
pub use weights::{WeightTable, WinnerKind};
