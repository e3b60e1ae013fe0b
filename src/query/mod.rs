//! Query evaluation: filter → sort → paginate over a [`Snapshot`].
//!
//! [`evaluate`] is a pure function of `(snapshot, params)`. [`Evaluator`] adds a configurable
//! rayon pool used to filter large snapshots in parallel; the parallel path preserves input
//! order, so both paths return identical results.
//!
//! ## Example
//!
//! ```rust
//! use exoplanet_query::query::{evaluate, QueryParams};
//! use exoplanet_query::types::{Column, ExoplanetRecord, Snapshot, SortOrder};
//! use exoplanet_query::QueryError;
//!
//! let snapshot = Snapshot::new(vec![
//!     ExoplanetRecord::new(2008, "Imaging", "HostA", "F1"),
//!     ExoplanetRecord::new(2008, "Transit", "HostB", "F1"),
//!     ExoplanetRecord::new(2010, "Transit", "HostC", "F2"),
//! ]);
//!
//! let params = QueryParams::default()
//!     .with_filter(Column::Method, "Transit")
//!     .sorted_by(Column::Year, SortOrder::Desc);
//! let result = evaluate(&snapshot, &params).unwrap();
//! assert_eq!(result.total, 2);
//! assert_eq!(result.data[0].discovery_year, Some(2010));
//!
//! let missing = QueryParams::default().with_filter(Column::Year, "1999");
//! assert_eq!(evaluate(&snapshot, &missing), Err(QueryError::NoMatch));
//! ```

pub mod filter;
pub mod paginate;
pub mod params;
pub mod sort;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::types::{ExoplanetRecord, Snapshot};

pub use filter::{filter_records, RecordFilter};
pub use params::{QueryParams, DEFAULT_PAGE_SIZE};

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Number of matching rows before pagination.
    pub total: usize,
    /// The requested page (1-based), echoed back.
    pub page: usize,
    /// `ceil(total / pageSize)`, 0 when nothing matched.
    pub total_pages: usize,
    /// At most `pageSize` rows in final sorted order.
    pub data: Vec<ExoplanetRecord>,
}

/// Configuration for the [`Evaluator`].
#[derive(Debug, Clone)]
pub struct EvaluatorOptions {
    /// Snapshots with at least this many rows are filtered in parallel.
    ///
    /// `usize::MAX` disables parallel filtering.
    pub parallel_threshold: usize,
    /// Worker threads for a dedicated pool. `None` uses rayon's global pool.
    pub num_threads: Option<usize>,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 16_384,
            num_threads: None,
        }
    }
}

/// Evaluates queries against snapshots.
///
/// Holds no dataset state; any number of threads may share one evaluator.
pub struct Evaluator {
    opts: EvaluatorOptions,
    pool: Option<ThreadPool>,
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("opts", &self.opts)
            .field("dedicated_pool", &self.pool.is_some())
            .finish()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvaluatorOptions::default())
    }
}

impl Evaluator {
    /// Create an evaluator.
    ///
    /// If a dedicated pool is requested but cannot be built, rayon's global pool is used.
    pub fn new(opts: EvaluatorOptions) -> Self {
        let pool = opts.num_threads.and_then(|n| {
            match ThreadPoolBuilder::new().num_threads(n.max(1)).build() {
                Ok(pool) => Some(pool),
                Err(e) => {
                    log::warn!("falling back to the global rayon pool: {e}");
                    None
                }
            }
        });
        Self { opts, pool }
    }

    /// Options this evaluator was built with.
    pub fn options(&self) -> &EvaluatorOptions {
        &self.opts
    }

    /// Evaluate `params` against `snapshot`.
    ///
    /// 1. validate pagination
    /// 2. keep rows matching every supplied filter
    /// 3. fail with [`QueryError::NoMatch`] if a filter was supplied and nothing matched
    /// 4. stable sort when `sort_by` is set
    /// 5. slice the requested page (past-the-end pages are empty, not an error)
    pub fn evaluate(&self, snapshot: &Snapshot, params: &QueryParams) -> Result<QueryResult, QueryError> {
        params.validate()?;

        let filter = RecordFilter::from_params(params);
        let mut rows = self.filter(snapshot.records(), &filter);

        if !filter.is_empty() && rows.is_empty() {
            return Err(QueryError::NoMatch);
        }

        if let Some(column) = params.sort_by {
            sort::sort_records(&mut rows, column, params.sort_order);
        }

        let total = rows.len();
        let range = paginate::page_range(total, params.page, params.page_size);
        let data = rows[range].iter().map(|r| (*r).clone()).collect();

        Ok(QueryResult {
            total,
            page: params.page,
            total_pages: paginate::total_pages(total, params.page_size),
            data,
        })
    }

    fn filter<'r>(&self, records: &'r [ExoplanetRecord], filter: &RecordFilter<'_>) -> Vec<&'r ExoplanetRecord> {
        if filter.is_empty() || records.len() < self.opts.parallel_threshold {
            return filter_records(records, filter);
        }
        // Indexed parallel collect keeps input order.
        let run = || {
            records
                .par_iter()
                .filter(|r| filter.matches(r))
                .collect::<Vec<_>>()
        };
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }
}

/// Evaluate `params` against `snapshot` sequentially.
///
/// Equivalent to [`Evaluator::evaluate`] with parallel filtering disabled.
pub fn evaluate(snapshot: &Snapshot, params: &QueryParams) -> Result<QueryResult, QueryError> {
    let evaluator = Evaluator {
        opts: EvaluatorOptions {
            parallel_threshold: usize::MAX,
            num_threads: None,
        },
        pool: None,
    };
    evaluator.evaluate(snapshot, params)
}
