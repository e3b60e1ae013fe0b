//! CSV decoding of the archive payload.

use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{Column, ExoplanetRecord};

/// Ingest a CSV file into normalized records.
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> IngestionResult<Vec<ExoplanetRecord>> {
    let mut rdr = reader_builder().from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest CSV text held in memory (e.g. an HTTP response body).
pub fn ingest_csv_from_bytes(input: &[u8]) -> IngestionResult<Vec<ExoplanetRecord>> {
    let mut rdr = reader_builder().from_reader(input);
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest CSV data from an existing CSV reader.
///
/// Rules:
///
/// - CSV must have headers; columns are located by their archive name, in any order.
/// - A missing column reads as an empty cell on every row. If none of the expected columns is
///   present the payload is rejected as a schema mismatch.
/// - String cells have all double-quote characters stripped and surrounding whitespace trimmed.
/// - A non-empty `disc_year` must be an integer.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> IngestionResult<Vec<ExoplanetRecord>> {
    let headers = rdr.headers()?.clone();

    // Indexed by `Column::index`.
    let col_idxs: [Option<usize>; 4] = Column::ALL.map(|col| {
        headers
            .iter()
            .position(|h| normalize_text(h) == col.source_name())
    });

    if col_idxs.iter().all(Option::is_none) {
        return Err(IngestionError::SchemaMismatch {
            message: format!(
                "none of the expected columns {:?} found. headers={:?}",
                Column::ALL.map(Column::source_name),
                headers.iter().collect::<Vec<_>>()
            ),
        });
    }

    let cell = |record: &csv::StringRecord, col: Column| -> String {
        col_idxs[col.index()]
            .and_then(|idx| record.get(idx))
            .map(normalize_text)
            .unwrap_or_default()
    };

    let mut rows = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let year_raw = cell(&record, Column::Year);
        let discovery_year = parse_year(user_row, &year_raw)?;

        rows.push(ExoplanetRecord {
            discovery_year,
            discovery_method: cell(&record, Column::Method),
            host_name: cell(&record, Column::Host),
            discovery_facility: cell(&record, Column::Facility),
        });
    }

    Ok(rows)
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    // Short rows read their trailing columns as empty cells.
    builder.has_headers(true).flexible(true);
    builder
}

/// Strip embedded double quotes and trim.
pub(crate) fn normalize_text(raw: &str) -> String {
    raw.replace('"', "").trim().to_owned()
}

fn parse_year(row: usize, normalized: &str) -> IngestionResult<Option<i32>> {
    if normalized.is_empty() {
        return Ok(None);
    }
    normalized
        .parse::<i32>()
        .map(Some)
        .map_err(|e| IngestionError::ParseError {
            row,
            column: Column::Year.source_name().to_owned(),
            raw: normalized.to_owned(),
            message: e.to_string(),
        })
}
