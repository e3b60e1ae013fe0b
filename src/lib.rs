//! `exoplanet-query` is a small in-memory query engine over the NASA Exoplanet Archive
//! discovery table (`disc_year`, `discoverymethod`, `hostname`, `disc_facility`).
//!
//! The table is ingested once into an immutable [`types::Snapshot`], published through a
//! [`store::DatasetStore`], and queried with exact-match filters, an optional single-column
//! sort and pagination.
//!
//! ## Pipeline
//!
//! - [`ingestion`]: fetch (one HTTP GET) or read the CSV table and normalize it into
//!   [`types::ExoplanetRecord`]s; quote characters are stripped here, once
//! - [`store`]: derive the per-column filter options and publish `(rows, options)` atomically
//! - [`query`]: filter → stable sort → paginate against a captured snapshot
//! - [`error`]: [`IngestionError`] and [`QueryError`]
//!
//! ## Quick example: load and query
//!
//! ```rust
//! use exoplanet_query::query::QueryParams;
//! use exoplanet_query::store::DatasetStore;
//! use exoplanet_query::types::{Column, ExoplanetRecord};
//!
//! let store = DatasetStore::new();
//! store.load(vec![
//!     ExoplanetRecord::new(2008, "Imaging", "HostA", "F1"),
//!     ExoplanetRecord::new(2008, "Transit", "HostB", "F1"),
//!     ExoplanetRecord::new(2010, "Transit", "HostC", "F2"),
//! ]);
//!
//! assert_eq!(store.filter_options().years, vec![2008, 2010]);
//!
//! let params = QueryParams::default().with_filter(Column::Year, "2008");
//! let page = store.query(&params).unwrap();
//! assert_eq!(page.total, 2);
//! assert_eq!(page.data[0].host_name, "HostA");
//! ```
//!
//! ## Ingesting from the archive
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use exoplanet_query::ingestion::{IngestionOptions, LogObserver};
//! use exoplanet_query::store::DatasetStore;
//!
//! # fn main() -> Result<(), exoplanet_query::IngestionError> {
//! let store = DatasetStore::new();
//! let opts = IngestionOptions {
//!     observer: Some(Arc::new(LogObserver)),
//!     ..Default::default()
//! };
//! // On failure the store keeps its previous (here: empty) snapshot.
//! let snapshot = store.ingest(&opts)?;
//! println!("rows={}", snapshot.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! ### Query errors
//!
//! - [`QueryError::Validation`]: `page`/`pageSize` below 1, or an unknown `sortBy`/`sortOrder`
//! - [`QueryError::NoMatch`]: at least one filter was supplied and no row matched

pub mod error;
pub mod ingestion;
pub mod query;
pub mod store;
pub mod types;

pub use error::{IngestionError, IngestionResult, QueryError};
