//! The published dataset.
//!
//! [`DatasetStore`] owns the current [`Snapshot`] behind an `Arc`. Publishing swaps that one
//! pointer, so readers see either the previous snapshot or the new one with its matching filter
//! options, never a mix. Readers that captured a snapshot keep it alive and unchanged for as long
//! as they hold it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::error::{IngestionResult, QueryError};
use crate::ingestion::{self, IngestionOptions};
use crate::query::{Evaluator, QueryParams, QueryResult};
use crate::types::{ExoplanetRecord, FilterOptionSet, Snapshot};

/// Holds the current immutable snapshot and serializes ingestion cycles.
#[derive(Debug, Default)]
pub struct DatasetStore {
    current: RwLock<Arc<Snapshot>>,
    // Set on first publish, even when the published snapshot has no rows.
    loaded: AtomicBool,
    ingest_lock: Mutex<()>,
    evaluator: Evaluator,
}

impl DatasetStore {
    /// An empty store using the default [`Evaluator`].
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store evaluating queries with `evaluator`.
    pub fn with_evaluator(evaluator: Evaluator) -> Self {
        Self {
            current: RwLock::default(),
            loaded: AtomicBool::new(false),
            ingest_lock: Mutex::default(),
            evaluator,
        }
    }

    /// Derive filter options for `records` and publish them as the new snapshot.
    pub fn load(&self, records: Vec<ExoplanetRecord>) -> Arc<Snapshot> {
        let snapshot = Arc::new(Snapshot::new(records));
        {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            *current = Arc::clone(&snapshot);
            self.loaded.store(true, Ordering::Release);
        }
        log::info!(
            "published snapshot: {} records, {} years, {} methods, {} hosts, {} facilities",
            snapshot.row_count(),
            snapshot.filter_options().years.len(),
            snapshot.filter_options().methods.len(),
            snapshot.filter_options().hosts.len(),
            snapshot.filter_options().facilities.len(),
        );
        snapshot
    }

    /// The snapshot published at call time.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Filter options of the current snapshot (all empty before the first load).
    pub fn filter_options(&self) -> FilterOptionSet {
        self.snapshot().filter_options().clone()
    }

    /// True once any snapshot has been published, including one with no rows.
    ///
    /// Stays false while every ingestion so far has failed.
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    /// Run one ingestion cycle and publish its result.
    ///
    /// At most one cycle runs at a time; a concurrent caller waits for the running one to finish.
    /// Nothing is published unless `fetch` succeeds, so on error the previous snapshot stays in
    /// place (possibly still the empty one).
    pub fn refresh<F>(&self, fetch: F) -> IngestionResult<Arc<Snapshot>>
    where
        F: FnOnce() -> IngestionResult<Vec<ExoplanetRecord>>,
    {
        let _cycle = self.ingest_lock.lock().unwrap_or_else(PoisonError::into_inner);
        match fetch() {
            Ok(records) => Ok(self.load(records)),
            Err(e) => {
                log::warn!(
                    "ingestion failed, keeping previous snapshot ({} records): {e}",
                    self.snapshot().row_count()
                );
                Err(e)
            }
        }
    }

    /// [`Self::refresh`] from the upstream archive.
    pub fn ingest(&self, options: &IngestionOptions) -> IngestionResult<Arc<Snapshot>> {
        self.refresh(|| ingestion::fetch_dataset(options))
    }

    /// Evaluate `params` against the snapshot current at call time.
    pub fn query(&self, params: &QueryParams) -> Result<QueryResult, QueryError> {
        let snapshot = self.snapshot();
        self.evaluator.evaluate(&snapshot, params)
    }
}
