use serde::Serialize;
use thiserror::Error;

use super::weights::WinnerKind;
use crate::store::Role;

/// Invalid weight table. Fatal: no credit is computed with a rejected table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Unrecognized winner type '{0}' in weight table")]
    UnknownWinnerType(String),

    #[error("Weight for {kind} must not be negative, got {weight}")]
    NegativeWeight { kind: WinnerKind, weight: f64 },

    #[error("Weight for {kind} must be a finite number")]
    NonFiniteWeight { kind: WinnerKind },

    #[error("Weight for {kind} is given more than once")]
    DuplicateWeight { kind: WinnerKind },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedReason {
    /// The round exists but nobody holds the role
    RoleUnset,
    /// The hole result points at a round that was never defined
    RoundMissing,
}

/// A hole result names a role that cannot be resolved to a player. The hole
/// earns no credit; aggregation carries on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("Round '{round_id}' hole {hole}: {role} cannot be resolved ({reason:?})")]
pub struct UnresolvedRoleError {
    pub round_id: String,
    pub hole: u8,
    pub role: Role,
    pub reason: UnresolvedReason,
}
