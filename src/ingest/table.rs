use serde::{Deserialize, Serialize};

/// An already-read score export: column names plus rows of optional cells.
///
/// Blank cells are treated the same as missing ones. Rows shorter than the
/// header are padded with missing cells on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row of text cells; empty strings become missing cells
    pub fn with_row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let row = cells
            .into_iter()
            .map(|cell| {
                let cell = cell.as_ref();
                (!cell.trim().is_empty()).then(|| cell.to_string())
            })
            .collect();
        self.rows.push(row);
        self
    }

    /// Index of the first column whose canonical name equals `canonical`
    pub fn column_index(&self, canonical: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| canonical_column_name(column) == canonical)
    }

    /// Trimmed, non-blank cell value
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)?
            .get(column)?
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// Canonical form used to match export headers: trimmed, lower-cased, with
/// spaces and underscores removed
pub fn canonical_column_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Hole number encoded by a column such as `Hole7`, `hole_7` or `Hole 7`
pub fn hole_number(column: &str) -> Option<u32> {
    canonical_column_name(column)
        .strip_prefix("hole")
        .filter(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
        .and_then(|digits| digits.parse().ok())
        .filter(|hole| *hole > 0)
}
