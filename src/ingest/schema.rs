use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

use super::table::{canonical_column_name, hole_number, Table};

/// Stroke export layouts the normalizer understands, in detection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumIter)]
pub enum StrokeSchema {
    /// `PlayerName, CourseName, LayoutName, StartDate, EndDate, Total`
    PreAggregatedWithMetadata,
    /// `PlayerName, CourseName, StartDate, Hole1..HoleN`
    Wide,
    /// `Player, Total`
    Minimal,
}

/// Placeholder reported for the per-hole columns of the wide schema
const HOLE_COLUMNS: &str = "Hole1..HoleN";

impl StrokeSchema {
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            StrokeSchema::PreAggregatedWithMetadata => &[
                "PlayerName",
                "CourseName",
                "LayoutName",
                "StartDate",
                "EndDate",
                "Total",
            ],
            StrokeSchema::Wide => &["PlayerName", "CourseName", "StartDate", HOLE_COLUMNS],
            StrokeSchema::Minimal => &["Player", "Total"],
        }
    }

    /// Picks the first schema whose required columns are all present
    pub fn detect(table: &Table) -> Result<SchemaLayout, SchemaError> {
        let mut candidates = Vec::new();

        for schema in StrokeSchema::iter() {
            let missing = schema.missing_columns(table);
            if missing.is_empty() {
                return Ok(SchemaLayout::new(schema, table));
            }
            candidates.push(SchemaCandidate { schema, missing });
        }

        Err(SchemaError {
            found: table.columns.clone(),
            candidates,
        })
    }

    fn missing_columns(self, table: &Table) -> Vec<String> {
        self.required_columns()
            .iter()
            .filter(|column| {
                if **column == HOLE_COLUMNS {
                    !table.columns.iter().any(|c| hole_number(c).is_some())
                } else {
                    table.column_index(&canonical_column_name(column)).is_none()
                }
            })
            .map(|column| column.to_string())
            .collect()
    }
}

/// Column positions resolved for a detected schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaLayout {
    pub schema: StrokeSchema,
    pub player: usize,
    pub total: Option<usize>,
    pub course: Option<usize>,
    pub start_date: Option<usize>,
    /// (hole number, column index), ordered by hole number
    pub holes: Vec<(u32, usize)>,
}

impl SchemaLayout {
    fn new(schema: StrokeSchema, table: &Table) -> Self {
        let player_column = match schema {
            StrokeSchema::Minimal => "player",
            _ => "playername",
        };

        let mut holes: Vec<(u32, usize)> = match schema {
            StrokeSchema::Wide => table
                .columns
                .iter()
                .enumerate()
                .filter_map(|(index, column)| hole_number(column).map(|hole| (hole, index)))
                .collect(),
            _ => Vec::new(),
        };
        holes.sort_by_key(|(hole, _)| *hole);
        holes.dedup_by_key(|(hole, _)| *hole);

        Self {
            schema,
            // detection guarantees the player column exists
            player: table.column_index(player_column).unwrap_or_default(),
            total: match schema {
                StrokeSchema::Wide => None,
                _ => table.column_index("total"),
            },
            course: table.column_index("coursename"),
            start_date: table.column_index("startdate"),
            holes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaCandidate {
    pub schema: StrokeSchema,
    pub missing: Vec<String>,
}

/// The upload matched none of the recognized column sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error(
    "No recognized stroke schema (found columns: [{found}]; {missing})",
    found = .found.join(", "),
    missing = describe_candidates(.candidates)
)]
pub struct SchemaError {
    pub found: Vec<String>,
    pub candidates: Vec<SchemaCandidate>,
}

fn describe_candidates(candidates: &[SchemaCandidate]) -> String {
    candidates
        .iter()
        .map(|c| format!("{} is missing {}", c.schema, c.missing.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}
