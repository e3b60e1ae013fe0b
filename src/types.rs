//! Core data model types.
//!
//! Ingestion produces [`ExoplanetRecord`]s whose string fields are already normalized; every
//! other part of the crate compares those values as-is.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One discovery entry from the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExoplanetRecord {
    /// Discovery year. `None` when the source cell was empty.
    pub discovery_year: Option<i32>,
    /// Discovery method (e.g. `Transit`, `Radial Velocity`).
    pub discovery_method: String,
    /// Host star name.
    pub host_name: String,
    /// Discovery facility.
    pub discovery_facility: String,
}

impl ExoplanetRecord {
    /// Create a record from already-normalized values.
    pub fn new(
        discovery_year: impl Into<Option<i32>>,
        discovery_method: impl Into<String>,
        host_name: impl Into<String>,
        discovery_facility: impl Into<String>,
    ) -> Self {
        Self {
            discovery_year: discovery_year.into(),
            discovery_method: discovery_method.into(),
            host_name: host_name.into(),
            discovery_facility: discovery_facility.into(),
        }
    }
}

/// The four filterable/sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    /// `disc_year`
    Year = 0,
    /// `discoverymethod`
    Method = 1,
    /// `hostname`
    Host = 2,
    /// `disc_facility`
    Facility = 3,
}

impl Column {
    /// All columns in upstream order; `ALL[c.index()] == c`.
    pub const ALL: [Column; 4] = [Column::Year, Column::Method, Column::Host, Column::Facility];

    /// Position of this column in [`Self::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short query-parameter name (`year`, `method`, `host`, `facility`).
    pub fn name(self) -> &'static str {
        match self {
            Column::Year => "year",
            Column::Method => "method",
            Column::Host => "host",
            Column::Facility => "facility",
        }
    }

    /// Column header used by the archive CSV payload.
    pub fn source_name(self) -> &'static str {
        match self {
            Column::Year => "disc_year",
            Column::Method => "discoverymethod",
            Column::Host => "hostname",
            Column::Facility => "disc_facility",
        }
    }

    /// Resolve a column from either its short name or its archive header name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == name || c.source_name() == name)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending (default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Parse `asc` / `desc`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Distinct, sorted selectable values per column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptionSet {
    /// Ascending numeric.
    pub years: Vec<i32>,
    /// Ascending ordinal.
    pub methods: Vec<String>,
    /// Ascending ordinal.
    pub hosts: Vec<String>,
    /// Ascending ordinal.
    pub facilities: Vec<String>,
}

impl FilterOptionSet {
    /// Derive the option sets in a single pass over `records`.
    ///
    /// Empty cells are not selectable and are skipped.
    pub fn from_records(records: &[ExoplanetRecord]) -> Self {
        let mut years = BTreeSet::new();
        let mut methods = BTreeSet::new();
        let mut hosts = BTreeSet::new();
        let mut facilities = BTreeSet::new();

        for record in records {
            if let Some(year) = record.discovery_year {
                years.insert(year);
            }
            insert_non_empty(&mut methods, &record.discovery_method);
            insert_non_empty(&mut hosts, &record.host_name);
            insert_non_empty(&mut facilities, &record.discovery_facility);
        }

        Self {
            years: years.into_iter().collect(),
            methods: methods.into_iter().map(str::to_owned).collect(),
            hosts: hosts.into_iter().map(str::to_owned).collect(),
            facilities: facilities.into_iter().map(str::to_owned).collect(),
        }
    }

    /// True when no values are selectable in any column.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
            && self.methods.is_empty()
            && self.hosts.is_empty()
            && self.facilities.is_empty()
    }
}

fn insert_non_empty<'a>(set: &mut BTreeSet<&'a str>, value: &'a str) {
    if !value.is_empty() {
        set.insert(value);
    }
}

/// An immutable, fully-derived view of the dataset.
///
/// Built once per ingestion and never mutated afterwards; the rows and their filter options are
/// always published together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    records: Vec<ExoplanetRecord>,
    filter_options: FilterOptionSet,
}

impl Snapshot {
    /// Build a snapshot, deriving its filter options from `records`.
    pub fn new(records: Vec<ExoplanetRecord>) -> Self {
        let filter_options = FilterOptionSet::from_records(&records);
        Self {
            records,
            filter_options,
        }
    }

    /// Rows in ingestion order.
    pub fn records(&self) -> &[ExoplanetRecord] {
        &self.records
    }

    /// Filter options derived from [`Self::records`].
    pub fn filter_options(&self) -> &FilterOptionSet {
        &self.filter_options
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// True for the pre-ingestion snapshot (or an ingestion that produced no rows).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
