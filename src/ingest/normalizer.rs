use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::{
    dates::normalize_date,
    errors::{DataWarning, RowIssue},
    schema::{SchemaError, SchemaLayout, StrokeSchema},
    table::Table,
};
use crate::store::{normalize_player_name, RecordStore, StrokeRecord};

/// UDisc scorecard exports lead with a pseudo-player holding the course par
const PAR_ROW_PLAYER: &str = "Par";

/// Canonical stroke records produced from one upload, not yet stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUpload {
    pub schema: StrokeSchema,
    pub records: Vec<StrokeRecord>,
    pub warnings: Vec<DataWarning>,
}

/// Outcome of an upload that was applied to a store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub schema: StrokeSchema,
    pub records_upserted: usize,
    pub new_players: Vec<String>,
    pub warnings: Vec<DataWarning>,
}

/// Converts a table into stroke records without touching any store.
///
/// `round_id` overrides the round derived from course and date. Rows that
/// cannot be converted become warnings; only a schema mismatch fails.
pub fn normalize(table: &Table, round_id: Option<&str>) -> Result<NormalizedUpload, SchemaError> {
    let layout = StrokeSchema::detect(table)?;
    let explicit_round = round_id.map(str::trim).filter(|id| !id.is_empty());

    debug!(
        schema = %layout.schema,
        rows = table.rows.len(),
        explicit_round = ?explicit_round,
        "Normalizing stroke upload"
    );

    let mut records = Vec::new();
    let mut warnings = Vec::new();

    for row in 0..table.rows.len() {
        let player = table.cell(row, layout.player).and_then(normalize_player_name);

        let Some(player) = player else {
            warnings.push(DataWarning {
                row: row + 1,
                player: None,
                issue: RowIssue::MissingPlayer,
            });
            continue;
        };

        if player == PAR_ROW_PLAYER && layout.schema != StrokeSchema::Minimal {
            debug!(row = row + 1, "Skipping par row");
            continue;
        }

        match convert_row(table, &layout, row, explicit_round) {
            Ok((round, total_strokes)) => records.push(StrokeRecord {
                round_id: round,
                player,
                total_strokes,
            }),
            Err(issue) => {
                warn!(row = row + 1, player = %player, %issue, "Skipping upload row");
                warnings.push(DataWarning {
                    row: row + 1,
                    player: Some(player),
                    issue,
                });
            }
        }
    }

    Ok(NormalizedUpload {
        schema: layout.schema,
        records,
        warnings,
    })
}

/// Normalizes `table` and upserts every valid record into `store`.
///
/// Nothing is written when the schema is not recognized.
#[instrument(skip(store, table), fields(rows = table.rows.len()))]
pub fn ingest_strokes<S: RecordStore>(
    store: &mut S,
    table: &Table,
    round_id: Option<&str>,
) -> Result<IngestReport, SchemaError> {
    let upload = normalize(table, round_id)?;

    let mut new_players = Vec::new();
    let records_upserted = upload.records.len();

    for record in upload.records {
        if store.add_player(&record.player) {
            new_players.push(record.player.clone());
        }
        store.upsert_stroke(record);
    }

    info!(
        schema = %upload.schema,
        records_upserted,
        new_players = new_players.len(),
        warnings = upload.warnings.len(),
        "Stroke upload ingested"
    );

    Ok(IngestReport {
        schema: upload.schema,
        records_upserted,
        new_players,
        warnings: upload.warnings,
    })
}

fn convert_row(
    table: &Table,
    layout: &SchemaLayout,
    row: usize,
    explicit_round: Option<&str>,
) -> Result<(Option<String>, u32), RowIssue> {
    let total_strokes = match layout.schema {
        StrokeSchema::Wide => sum_holes(table, layout, row)?,
        StrokeSchema::PreAggregatedWithMetadata | StrokeSchema::Minimal => {
            let raw = layout
                .total
                .and_then(|column| table.cell(row, column))
                .ok_or(RowIssue::MissingTotal)?;
            parse_strokes(raw).ok_or_else(|| RowIssue::InvalidTotal {
                value: raw.to_string(),
            })?
        }
    };

    let round = match (explicit_round, layout.schema) {
        (Some(id), _) => Some(id.to_string()),
        (None, StrokeSchema::Minimal) => None,
        (None, _) => Some(derive_round_id(table, layout, row)?),
    };

    Ok((round, total_strokes))
}

/// Sums the recorded holes; blank holes are left out of the total
fn sum_holes(table: &Table, layout: &SchemaLayout, row: usize) -> Result<u32, RowIssue> {
    let mut total: u32 = 0;
    let mut scored = 0;

    for (hole, column) in &layout.holes {
        let Some(raw) = table.cell(row, *column) else {
            continue;
        };
        let strokes = parse_strokes(raw).ok_or_else(|| RowIssue::InvalidHoleScore {
            hole: *hole,
            value: raw.to_string(),
        })?;
        total = total.saturating_add(strokes);
        scored += 1;
    }

    if scored == 0 {
        return Err(RowIssue::NoHoleScores);
    }
    Ok(total)
}

/// `course + "-" + YYYY-MM-DD`
fn derive_round_id(table: &Table, layout: &SchemaLayout, row: usize) -> Result<String, RowIssue> {
    let course = layout
        .course
        .and_then(|column| table.cell(row, column))
        .ok_or(RowIssue::MissingCourse)?;
    let raw_date = layout
        .start_date
        .and_then(|column| table.cell(row, column))
        .ok_or(RowIssue::MissingDate)?;
    let date = normalize_date(raw_date).ok_or_else(|| RowIssue::UnparseableDate {
        value: raw_date.to_string(),
    })?;

    Ok(format!("{}-{}", course, date))
}

/// Accepts whole numbers, including floats with no fractional part
fn parse_strokes(raw: &str) -> Option<u32> {
    if let Ok(value) = raw.parse::<u32>() {
        return Some(value);
    }

    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}
