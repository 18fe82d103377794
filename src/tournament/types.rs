use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::bonus::{TeamCreditPolicy, WeightTable};
use crate::ingest::Table;

#[derive(Debug, Deserialize)]
pub struct CreateTournamentRequest {
    pub id: String,
    /// Named weight slots, validated when the tournament is built
    pub weights: BTreeMap<String, f64>,
    #[serde(default)]
    pub team_credit: TeamCreditPolicy,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TournamentResponse {
    pub id: String,
    pub weights: WeightTable,
    pub team_credit: TeamCreditPolicy,
}

/// An already-read export. Cells may be JSON strings, numbers or null.
#[derive(Debug, Deserialize)]
pub struct UploadStrokesRequest {
    #[serde(default)]
    pub round_id: Option<String>,
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}

impl UploadStrokesRequest {
    pub fn into_table(self) -> Table {
        let rows = self
            .rows
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect();

        Table {
            columns: self.columns,
            rows,
        }
    }
}

fn cell_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        other => Some(other.to_string()),
    }
}
