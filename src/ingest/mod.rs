mod dates;
mod errors;
pub mod normalizer;
pub mod schema;
pub mod table;

pub use dates::normalize_date;
pub use errors::{DataWarning, RowIssue};
pub use normalizer::{ingest_strokes, normalize, IngestReport, NormalizedUpload};
pub use schema::{SchemaCandidate, SchemaError, SchemaLayout, StrokeSchema};
pub use table::Table;
