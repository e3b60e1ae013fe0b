//! Observed ingestion entrypoints.
//!
//! [`fetch_dataset`] downloads the archive table over HTTP; [`ingest_from_path`] reads a local
//! CSV dump of the same table. Both decode through [`super::csv`] and, when an
//! [`IngestionObserver`] is configured, report success/failure/alerts to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{IngestionError, IngestionResult};
use crate::types::ExoplanetRecord;

use super::csv;
use super::observability::{
    severity_for_error, IngestionContext, IngestionObserver, IngestionSeverity, IngestionSource,
    IngestionStats,
};

/// Exoplanet Archive TAP query selecting the four discovery columns as CSV.
pub const ARCHIVE_TAP_URL: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync?query=select+disc_year,discoverymethod,hostname,disc_facility+from+ps&format=csv";

/// Options controlling ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Endpoint returning the CSV table.
    pub url: String,
    /// Whole-request timeout (connect + body).
    pub timeout: Duration,
    /// `User-Agent` header sent upstream.
    pub user_agent: String,
    /// Ignore `HTTP_PROXY`/`HTTPS_PROXY` and connect directly.
    pub no_proxy: bool,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("url", &self.url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("no_proxy", &self.no_proxy)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            url: ARCHIVE_TAP_URL.to_string(),
            timeout: Duration::from_secs(60),
            user_agent: format!("exoplanet-query/{}", env!("CARGO_PKG_VERSION")),
            no_proxy: false,
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Fetch the archive table from `options.url` and decode it into normalized records.
///
/// Issues exactly one GET. Any transport failure, non-success status or decode error is
/// returned as an [`IngestionError`]; no partial rows are returned.
///
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use exoplanet_query::ingestion::{fetch_dataset, IngestionOptions, LogObserver};
///
/// # fn main() -> Result<(), exoplanet_query::IngestionError> {
/// let opts = IngestionOptions {
///     timeout: Duration::from_secs(30),
///     observer: Some(Arc::new(LogObserver)),
///     ..Default::default()
/// };
/// let rows = fetch_dataset(&opts)?;
/// println!("rows={}", rows.len());
/// # Ok(())
/// # }
/// ```
pub fn fetch_dataset(options: &IngestionOptions) -> IngestionResult<Vec<ExoplanetRecord>> {
    let ctx = IngestionContext {
        source: IngestionSource::Url(options.url.clone()),
    };
    let result = download(options).and_then(|body| csv::ingest_csv_from_bytes(&body));
    report(options, &ctx, &result);
    result
}

/// Ingest a local CSV dump of the archive table, reporting to the configured observer.
///
/// Only the observer fields of `options` are used.
pub fn ingest_from_path(
    path: impl AsRef<Path>,
    options: &IngestionOptions,
) -> IngestionResult<Vec<ExoplanetRecord>> {
    let path = path.as_ref();
    let ctx = IngestionContext {
        source: IngestionSource::Path(path.to_path_buf()),
    };
    let result = csv::ingest_csv_from_path(path);
    report(options, &ctx, &result);
    result
}

fn download(options: &IngestionOptions) -> IngestionResult<Vec<u8>> {
    let mut builder = reqwest::blocking::Client::builder()
        .user_agent(options.user_agent.as_str())
        .timeout(options.timeout);
    if options.no_proxy {
        builder = builder.no_proxy();
    }
    let client = builder.build()?;

    let response = client.get(&options.url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(IngestionError::HttpStatus {
            status: status.as_u16(),
            url: options.url.clone(),
        });
    }

    Ok(response.bytes()?.to_vec())
}

fn report(
    options: &IngestionOptions,
    ctx: &IngestionContext,
    result: &IngestionResult<Vec<ExoplanetRecord>>,
) {
    let Some(obs) = options.observer.as_ref() else {
        return;
    };
    match result {
        Ok(rows) => obs.on_success(ctx, IngestionStats { rows: rows.len() }),
        Err(e) => {
            let sev = severity_for_error(e);
            obs.on_failure(ctx, sev, e);
            if sev >= options.alert_at_or_above {
                obs.on_alert(ctx, sev, e);
            }
        }
    }
}
