//! Query parameters and their parsing from raw transport key/value pairs.

use crate::error::QueryError;
use crate::types::{Column, SortOrder};

/// Default page size when none is supplied.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Exact-match filters, optional sort and pagination for one query.
///
/// `None` and `Some("")` filters both mean "not supplied".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub year: Option<String>,
    pub method: Option<String>,
    pub host: Option<String>,
    pub facility: Option<String>,
    pub sort_by: Option<Column>,
    pub sort_order: SortOrder,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            year: None,
            method: None,
            host: None,
            facility: None,
            sort_by: None,
            sort_order: SortOrder::Asc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryParams {
    /// Set the filter value for `column`.
    pub fn with_filter(mut self, column: Column, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match column {
            Column::Year => self.year = value,
            Column::Method => self.method = value,
            Column::Host => self.host = value,
            Column::Facility => self.facility = value,
        }
        self
    }

    /// Sort by `column` in `order`.
    pub fn sorted_by(mut self, column: Column, order: SortOrder) -> Self {
        self.sort_by = Some(column);
        self.sort_order = order;
        self
    }

    /// Request page `page` of `page_size` rows.
    pub fn paged(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// The supplied (non-empty) filter for `column`, if any.
    pub fn filter(&self, column: Column) -> Option<&str> {
        let value = match column {
            Column::Year => &self.year,
            Column::Method => &self.method,
            Column::Host => &self.host,
            Column::Facility => &self.facility,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// True when at least one filter is supplied.
    pub fn has_filters(&self) -> bool {
        Column::ALL.iter().any(|&c| self.filter(c).is_some())
    }

    /// Check pagination bounds.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.page < 1 {
            return Err(QueryError::validation("page must be >= 1"));
        }
        if self.page_size < 1 {
            return Err(QueryError::validation("pageSize must be >= 1"));
        }
        Ok(())
    }

    /// Parse raw query-string pairs as sent by HTTP clients.
    ///
    /// Recognized keys: `year`, `method`, `host`, `facility`, `sortBy`, `sortOrder`, `page`,
    /// `pageSize` (alias `limit`). Empty values count as absent and unknown keys are ignored.
    /// `sortBy` accepts short names and archive column names (`disc_year`, ...).
    ///
    /// ```rust
    /// use exoplanet_query::query::QueryParams;
    /// use exoplanet_query::types::{Column, SortOrder};
    ///
    /// let params = QueryParams::from_pairs([
    ///     ("method", "Transit"),
    ///     ("sortBy", "disc_year"),
    ///     ("sortOrder", "desc"),
    ///     ("limit", "25"),
    ///     ("year", ""),
    /// ])
    /// .unwrap();
    /// assert_eq!(params.filter(Column::Method), Some("Transit"));
    /// assert_eq!(params.filter(Column::Year), None);
    /// assert_eq!(params.sort_by, Some(Column::Year));
    /// assert_eq!(params.sort_order, SortOrder::Desc);
    /// assert_eq!(params.page_size, 25);
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            if value.is_empty() {
                continue;
            }
            match key {
                "year" | "method" | "host" | "facility" => {
                    if let Some(column) = Column::from_name(key) {
                        params = params.with_filter(column, value);
                    }
                }
                "sortBy" => {
                    params.sort_by = Some(Column::from_name(value).ok_or_else(|| {
                        QueryError::validation(format!("unknown sortBy column '{value}'"))
                    })?);
                }
                "sortOrder" => {
                    params.sort_order = SortOrder::from_name(value).ok_or_else(|| {
                        QueryError::validation(format!(
                            "sortOrder must be 'asc' or 'desc', got '{value}'"
                        ))
                    })?;
                }
                "page" => params.page = parse_positive("page", value)?,
                "pageSize" | "limit" => params.page_size = parse_positive("pageSize", value)?,
                _ => {}
            }
        }
        Ok(params)
    }
}

fn parse_positive(name: &str, raw: &str) -> Result<usize, QueryError> {
    let n = raw
        .trim()
        .parse::<i64>()
        .map_err(|e| QueryError::validation(format!("{name} must be an integer ('{raw}': {e})")))?;
    if n < 1 {
        return Err(QueryError::validation(format!("{name} must be >= 1")));
    }
    usize::try_from(n).map_err(|_| QueryError::validation(format!("{name} is too large")))
}
