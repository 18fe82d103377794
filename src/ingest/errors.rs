use serde::Serialize;
use thiserror::Error;

/// Why a single upload row was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowIssue {
    #[error("player name is missing")]
    MissingPlayer,

    #[error("total is missing")]
    MissingTotal,

    #[error("total '{value}' is not a non-negative whole number")]
    InvalidTotal { value: String },

    #[error("hole {hole} score '{value}' is not a non-negative whole number")]
    InvalidHoleScore { hole: u32, value: String },

    #[error("no hole scores recorded")]
    NoHoleScores,

    #[error("course name is missing, round cannot be derived")]
    MissingCourse,

    #[error("start date is missing, round cannot be derived")]
    MissingDate,

    #[error("start date '{value}' could not be parsed")]
    UnparseableDate { value: String },
}

/// Non-fatal problem with one upload row. The row is skipped and the rest of
/// the upload is still ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("row {row}: {issue}")]
pub struct DataWarning {
    /// 1-based index among the data rows (the header is not counted)
    pub row: usize,
    pub player: Option<String>,
    pub issue: RowIssue,
}
