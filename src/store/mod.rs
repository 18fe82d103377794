pub mod designation;
mod errors;
pub mod models;
pub mod repository;

pub use designation::{Role, TeamLabel, TeamSide, TeamStyle, WinnerDesignation};
pub use errors::RecordError;
pub use models::*;
pub use repository::{InMemoryRecordStore, RecordStore, TournamentSnapshot};
