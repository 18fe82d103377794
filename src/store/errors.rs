use thiserror::Error;

/// Rejection of a manually entered round or hole result. Nothing is written
/// to the store when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Round number must be at least 1")]
    InvalidRoundNumber,

    #[error("A round must have at least one hole")]
    InvalidHoleCount,

    #[error("Cannot derive a round identifier from day label '{0}'")]
    UnderivableRoundId(String),

    #[error("Round '{0}' is not defined")]
    UnknownRound(String),

    #[error("Hole {hole} is outside 1..={holes} for round '{round_id}'")]
    HoleOutOfRange { round_id: String, hole: u8, holes: u8 },

    #[error("Winner designation must not be blank")]
    BlankWinner,
}
