//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`fetch_dataset`] (from [`unified`]) which:
//!
//! - downloads the archive table with a single, time-bounded HTTP GET
//! - decodes it into normalized [`crate::types::ExoplanetRecord`]s
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! Local dumps go through [`ingest_from_path`]; raw decoding lives in [`csv`].

pub mod csv;
pub mod observability;
pub mod unified;

pub use observability::{
    severity_for_error, CompositeObserver, IngestionContext, IngestionObserver, IngestionSeverity,
    IngestionSource, IngestionStats, LogObserver, StdErrObserver,
};
pub use unified::{fetch_dataset, ingest_from_path, IngestionOptions, ARCHIVE_TAP_URL};
