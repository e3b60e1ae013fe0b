//! Exact-match row filtering.

use crate::types::{Column, ExoplanetRecord};

use super::params::QueryParams;

/// Compiled form of the filters in a [`QueryParams`].
///
/// All supplied filters must match (logical AND). Comparisons are case-sensitive equality on
/// the values normalized at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordFilter<'a> {
    year: Option<YearMatch>,
    method: Option<&'a str>,
    host: Option<&'a str>,
    facility: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearMatch {
    Exactly(i32),
    /// The filter text is not the decimal rendering of any year.
    Nothing,
}

impl<'a> RecordFilter<'a> {
    /// Compile the filters supplied in `params`.
    pub fn from_params(params: &'a QueryParams) -> Self {
        Self {
            year: params.filter(Column::Year).map(compile_year),
            method: params.filter(Column::Method),
            host: params.filter(Column::Host),
            facility: params.filter(Column::Facility),
        }
    }

    /// True when no filter is active.
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.method.is_none() && self.host.is_none() && self.facility.is_none()
    }

    /// True if `record` passes every active filter.
    pub fn matches(&self, record: &ExoplanetRecord) -> bool {
        let year_ok = match self.year {
            None => true,
            Some(YearMatch::Exactly(y)) => record.discovery_year == Some(y),
            Some(YearMatch::Nothing) => false,
        };
        year_ok
            && self.method.is_none_or(|m| record.discovery_method == m)
            && self.host.is_none_or(|h| record.host_name == h)
            && self.facility.is_none_or(|f| record.discovery_facility == f)
    }
}

// A year filter matches only the canonical rendering ("2008", not "02008" or "+2008").
fn compile_year(raw: &str) -> YearMatch {
    match raw.parse::<i32>() {
        Ok(y) if y.to_string() == raw => YearMatch::Exactly(y),
        _ => YearMatch::Nothing,
    }
}

/// Returns references to the records that pass `filter`, in input order.
pub fn filter_records<'r>(
    records: &'r [ExoplanetRecord],
    filter: &RecordFilter<'_>,
) -> Vec<&'r ExoplanetRecord> {
    if filter.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|r| filter.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_records, RecordFilter};
    use crate::query::QueryParams;
    use crate::types::{Column, ExoplanetRecord};

    fn sample_records() -> Vec<ExoplanetRecord> {
        vec![
            ExoplanetRecord::new(2008, "Imaging", "HostA", "F1"),
            ExoplanetRecord::new(2008, "Transit", "HostB", "F1"),
            ExoplanetRecord::new(2010, "Transit", "HostC", "F2"),
        ]
    }

    #[test]
    fn no_filters_keeps_everything_in_order() {
        let records = sample_records();
        let params = QueryParams::default();
        let out = filter_records(&records, &RecordFilter::from_params(&params));
        assert_eq!(out, records.iter().collect::<Vec<_>>());
    }

    #[test]
    fn filters_combine_with_and() {
        let records = sample_records();
        let params = QueryParams::default()
            .with_filter(Column::Year, "2008")
            .with_filter(Column::Method, "Transit");
        let out = filter_records(&records, &RecordFilter::from_params(&params));
        assert_eq!(out, vec![&records[1]]);
    }

    #[test]
    fn string_match_is_case_sensitive() {
        let records = sample_records();
        let params = QueryParams::default().with_filter(Column::Method, "transit");
        let out = filter_records(&records, &RecordFilter::from_params(&params));
        assert!(out.is_empty());
    }

    #[test]
    fn non_canonical_year_matches_nothing() {
        let records = sample_records();
        for raw in ["02008", "+2008", "2008.0", "recent"] {
            let params = QueryParams::default().with_filter(Column::Year, raw);
            let out = filter_records(&records, &RecordFilter::from_params(&params));
            assert!(out.is_empty(), "year filter {raw:?} should match nothing");
        }
    }

    #[test]
    fn year_filter_never_matches_missing_year() {
        let records = vec![ExoplanetRecord::new(None, "Transit", "HostZ", "F9")];
        let params = QueryParams::default().with_filter(Column::Year, "0");
        let out = filter_records(&records, &RecordFilter::from_params(&params));
        assert!(out.is_empty());
    }
}
