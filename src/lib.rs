// Library crate for the skins tournament scorer
// This file exposes the public API for the server binary and integration tests

pub mod bonus;
pub mod config;
pub mod ingest;
pub mod leaderboard;
pub mod shared;
pub mod store;
pub mod tournament;

// Re-export commonly used types for easier access in tests
pub use bonus::{
    BonusRulesEngine, BonusSummary, ConfigurationError, TeamCreditPolicy, UnresolvedRoleError,
    WeightTable, WinnerKind,
};
pub use ingest::{DataWarning, IngestReport, SchemaError, StrokeSchema, Table};
pub use leaderboard::{Leaderboard, LeaderboardRow};
pub use shared::{AppError, AppState};
pub use store::{
    InMemoryRecordStore, RecordError, RecordStore, Round, RoundDefinition, SkinsEntry,
    SkinsResult, StrokeRecord, TournamentSnapshot, WinnerDesignation,
};
pub use tournament::{router, TournamentRegistry, TournamentService};
