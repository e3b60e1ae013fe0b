//! Stable single-column ordering.

use std::cmp::Ordering;

use crate::types::{Column, ExoplanetRecord, SortOrder};

/// Compare two records on `column`.
///
/// Years compare numerically, with records lacking a year ordered before every year. The other
/// columns compare as ordinal (byte-wise) strings.
pub fn compare_by(column: Column, a: &ExoplanetRecord, b: &ExoplanetRecord) -> Ordering {
    match column {
        Column::Year => a.discovery_year.cmp(&b.discovery_year),
        Column::Method => a.discovery_method.cmp(&b.discovery_method),
        Column::Host => a.host_name.cmp(&b.host_name),
        Column::Facility => a.discovery_facility.cmp(&b.discovery_facility),
    }
}

/// Stable sort of `rows` by `column`.
///
/// `Desc` reverses the key comparison only, so rows with equal keys keep their relative input
/// order in both directions.
pub fn sort_records(rows: &mut [&ExoplanetRecord], column: Column, order: SortOrder) {
    match order {
        SortOrder::Asc => rows.sort_by(|a, b| compare_by(column, a, b)),
        SortOrder::Desc => rows.sort_by(|a, b| compare_by(column, b, a)),
    }
}

#[cfg(test)]
mod tests {
    use super::sort_records;
    use crate::types::{Column, ExoplanetRecord, SortOrder};

    #[test]
    fn year_sort_is_numeric_and_missing_years_come_first() {
        let records = vec![
            ExoplanetRecord::new(2010, "Transit", "A", "F"),
            ExoplanetRecord::new(999, "Transit", "B", "F"),
            ExoplanetRecord::new(None, "Transit", "C", "F"),
        ];
        let mut rows: Vec<_> = records.iter().collect();
        sort_records(&mut rows, Column::Year, SortOrder::Asc);
        let hosts: Vec<_> = rows.iter().map(|r| r.host_name.as_str()).collect();
        assert_eq!(hosts, vec!["C", "B", "A"]);
    }

    #[test]
    fn descending_keeps_ties_in_input_order() {
        let records = vec![
            ExoplanetRecord::new(2008, "Imaging", "HostA", "F1"),
            ExoplanetRecord::new(2010, "Transit", "HostC", "F2"),
            ExoplanetRecord::new(2008, "Transit", "HostB", "F1"),
        ];
        let mut rows: Vec<_> = records.iter().collect();
        sort_records(&mut rows, Column::Year, SortOrder::Desc);
        let hosts: Vec<_> = rows.iter().map(|r| r.host_name.as_str()).collect();
        assert_eq!(hosts, vec!["HostC", "HostA", "HostB"]);

        let mut rows: Vec<_> = records.iter().collect();
        sort_records(&mut rows, Column::Facility, SortOrder::Asc);
        let hosts: Vec<_> = rows.iter().map(|r| r.host_name.as_str()).collect();
        assert_eq!(hosts, vec!["HostA", "HostB", "HostC"]);
    }

    #[test]
    fn string_sort_is_ordinal() {
        let records = vec![
            ExoplanetRecord::new(2000, "b", "1", "F"),
            ExoplanetRecord::new(2000, "B", "2", "F"),
            ExoplanetRecord::new(2000, "a", "3", "F"),
        ];
        let mut rows: Vec<_> = records.iter().collect();
        sort_records(&mut rows, Column::Method, SortOrder::Asc);
        let methods: Vec<_> = rows.iter().map(|r| r.discovery_method.as_str()).collect();
        assert_eq!(methods, vec!["B", "a", "b"]);
    }
}
