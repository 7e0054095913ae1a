//! The page envelope wrapped around every successful response.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{ResourceKind, Row};
use crate::Error;

/// A page exactly as it comes off the wire.
///
/// The pagination counters are sometimes sent as strings, so both forms are accepted.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawPage {
    pub data: Vec<Row>,
    #[serde(rename = "currentPage", deserialize_with = "count")]
    pub current_page: u32,
    #[serde(rename = "totalPage", deserialize_with = "count")]
    pub total_pages: u32,
    #[serde(rename = "totalNumber", deserialize_with = "count")]
    pub total_rows: u64,
}

fn count<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let value = Value::deserialize(deserializer)?;
    let n = match &value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
    .ok_or_else(|| de::Error::custom(format!("expected a non-negative count, got {}", value)))?;
    T::try_from(n).map_err(|_| de::Error::custom(format!("count {} is out of range", n)))
}

/// One validated page of rows for a single resource kind.
///
/// Immutable once built. Iterating borrows the rows, so a page can be walked
/// any number of times.
#[derive(Debug, Clone)]
pub struct Response {
    kind: ResourceKind,
    data: Vec<Row>,
    current_page: u32,
    total_pages: u32,
    total_rows: u64,
}

impl Response {
    /// Validates a decoded page. Fails if the current page is past the last page.
    pub fn new(kind: ResourceKind, page: RawPage) -> Result<Self, Error> {
        if page.current_page > page.total_pages {
            return Err(Error::InvalidPageNumber {
                current_page: page.current_page,
                total_pages: page.total_pages,
            });
        }
        Ok(Self {
            kind,
            data: page.data,
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_rows: page.total_rows,
        })
    }

    /// Decodes and validates a JSON body.
    pub fn from_json(kind: ResourceKind, body: &str) -> Result<Self, Error> {
        let page: RawPage = serde_json::from_str(body).map_err(Error::request_failed)?;
        Self::new(kind, page)
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn rows(&self) -> &[Row] {
        &self.data
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.data.iter()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Rows matching the query across all pages, not the rows in this page.
    pub fn total_rows(&self) -> u64 {
        self.total_rows
    }

    pub fn page_info(&self) -> String {
        format!(
            "Current Page: {}\nTotal Pages: {}\nTotal Rows: {}",
            self.current_page, self.total_pages, self.total_rows
        )
    }

    /// Pretty-printed JSON of the rows, for debugging.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.data).unwrap_or_else(|_| "[]".to_string())
    }
}

impl<'a> IntoIterator for &'a Response {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.kind.render(&self.data))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(value: Value) -> RawPage {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn current_page_past_last_page_is_rejected() {
        let page = raw(json!({"data": [], "currentPage": 2, "totalPage": 1, "totalNumber": 0}));
        let err = Response::new(ResourceKind::Legislator, page).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPageNumber {
                current_page: 2,
                total_pages: 1
            }
        ));
    }

    #[test]
    fn counters_accept_numeric_strings() {
        let page = raw(json!({"data": [], "currentPage": "1", "totalPage": "3", "totalNumber": "250"}));
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_rows, 250);
    }

    #[test]
    fn negative_or_missing_counters_fail_to_decode() {
        assert!(serde_json::from_value::<RawPage>(
            json!({"data": [], "currentPage": -1, "totalPage": 1, "totalNumber": 0})
        )
        .is_err());
        assert!(serde_json::from_value::<RawPage>(json!({"data": [], "currentPage": 1})).is_err());
    }

    #[test]
    fn iteration_is_restartable() {
        let page = raw(json!({
            "data": [{"client_name": "A"}, {"client_name": "B"}],
            "currentPage": 1, "totalPage": 1, "totalNumber": 2
        }));
        let resp = Response::new(ResourceKind::Client, page).unwrap();
        let first: Vec<_> = resp.iter().collect();
        let second: Vec<_> = (&resp).into_iter().collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn page_info_and_json_rendering() {
        let page = raw(json!({
            "data": [{"issue_code": "TRD"}],
            "currentPage": 1, "totalPage": 4, "totalNumber": 37
        }));
        let resp = Response::new(ResourceKind::Issue, page).unwrap();
        assert_eq!(
            resp.page_info(),
            "Current Page: 1\nTotal Pages: 4\nTotal Rows: 37"
        );
        assert_eq!(
            resp.to_json_pretty(),
            "[\n  {\n    \"issue_code\": \"TRD\"\n  }\n]"
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let page = raw(json!({
            "data": [{"report_uuid": "4b799814", "report_year": 2020, "report_quarter_code": "2"}],
            "currentPage": 1, "totalPage": 1, "totalNumber": 1
        }));
        let resp = Response::new(ResourceKind::Report, page).unwrap();
        let first = resp.to_string();
        assert_eq!(first, resp.to_string());
        assert_eq!(first, "Reports:\n  4b799814 (Year: 2020, Quarter: 2)");
    }
}
