//! Resource kinds and their human-readable renderings.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Row;

/// The nine queryable resources exposed under `/api/<resource>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Legislator = 0,
    Bill = 1,
    Client = 2,
    Report = 3,
    Issue = 4,
    Network = 5,
    Text = 6,
    QuarterNetwork = 7,
    BillClientNetwork = 8,
}

/// Static per-kind data: endpoint path, rendering header and row formatter.
pub struct ResourceSpec {
    pub kind: ResourceKind,
    /// Path segment after `/api/`.
    pub path: &'static str,
    pub header: &'static str,
    pub render_row: fn(&Row) -> String,
    /// Row fields picked out by `render_row`, in display order.
    pub columns: &'static [&'static str],
}

// Indexed by `ResourceKind as usize`.
static RESOURCE_SPECS: [ResourceSpec; 9] = [
    ResourceSpec {
        kind: ResourceKind::Legislator,
        path: "legislators",
        header: "Legislators:",
        render_row: render_legislator,
        columns: &["legislator_full_name", "legislator_id"],
    },
    ResourceSpec {
        kind: ResourceKind::Bill,
        path: "bills",
        header: "Bills:",
        render_row: render_bill,
        columns: &["bill_number", "congress_number", "legislator_id"],
    },
    ResourceSpec {
        kind: ResourceKind::Client,
        path: "clients",
        header: "Clients:",
        render_row: render_client,
        columns: &["client_name", "client_uuid"],
    },
    ResourceSpec {
        kind: ResourceKind::Report,
        path: "reports",
        header: "Reports:",
        render_row: render_report,
        columns: &["report_uuid", "report_year", "report_quarter_code"],
    },
    ResourceSpec {
        kind: ResourceKind::Issue,
        path: "issues",
        header: "Issues:",
        render_row: render_issue,
        columns: &["issue_code", "report_uuid", "issue_ordi"],
    },
    ResourceSpec {
        kind: ResourceKind::Network,
        path: "networks",
        header: "Networks:",
        render_row: render_network,
        columns: &[
            "client_uuid",
            "legislator_id",
            "report_year",
            "n_bills_sponsored",
        ],
    },
    ResourceSpec {
        kind: ResourceKind::Text,
        path: "texts",
        header: "Texts:",
        render_row: render_text,
        columns: &["issue_code", "issue_text"],
    },
    ResourceSpec {
        kind: ResourceKind::QuarterNetwork,
        path: "quarter_level_networks",
        header: "Quarter-Level Networks:",
        render_row: render_quarter_network,
        columns: &[
            "client_uuid",
            "legislator_id",
            "report_year",
            "report_quarter_code",
            "n_bills_sponsored",
        ],
    },
    ResourceSpec {
        kind: ResourceKind::BillClientNetwork,
        path: "bill_client_networks",
        header: "Bill-Client Networks:",
        render_row: render_bill_client_network,
        columns: &["bill_number", "client_uuid", "issue_ordi"],
    },
];

impl ResourceKind {
    pub const ALL: [ResourceKind; 9] = [
        ResourceKind::Legislator,
        ResourceKind::Bill,
        ResourceKind::Client,
        ResourceKind::Report,
        ResourceKind::Issue,
        ResourceKind::Network,
        ResourceKind::Text,
        ResourceKind::QuarterNetwork,
        ResourceKind::BillClientNetwork,
    ];

    pub fn spec(self) -> &'static ResourceSpec {
        &RESOURCE_SPECS[self as usize]
    }

    /// Endpoint path, e.g. `/api/legislators`.
    pub fn endpoint(self) -> String {
        format!("/api/{}", self.spec().path)
    }

    /// Renders the header line followed by one line per row, without a trailing newline.
    pub fn render(self, rows: &[Row]) -> String {
        let spec = self.spec();
        let mut output = String::from(spec.header);
        for row in rows {
            output.push_str("\n  ");
            output.push_str(&(spec.render_row)(row));
        }
        output
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spec().path)
    }
}

/// Displays a row field: strings unquoted, missing or null as `N/A`, anything
/// else as compact JSON.
pub fn field<'a>(row: &'a Row, key: &str) -> Cow<'a, str> {
    match row.get(key) {
        None | Some(Value::Null) => Cow::Borrowed("N/A"),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

fn render_legislator(row: &Row) -> String {
    format!(
        "{} (ID: {})",
        field(row, "legislator_full_name"),
        field(row, "legislator_id")
    )
}

fn render_bill(row: &Row) -> String {
    format!(
        "{} (Congress: {}, Sponsor: {})",
        field(row, "bill_number"),
        field(row, "congress_number"),
        field(row, "legislator_id")
    )
}

fn render_client(row: &Row) -> String {
    format!(
        "{} (ID: {})",
        field(row, "client_name"),
        field(row, "client_uuid")
    )
}

fn render_report(row: &Row) -> String {
    format!(
        "{} (Year: {}, Quarter: {})",
        field(row, "report_uuid"),
        field(row, "report_year"),
        field(row, "report_quarter_code")
    )
}

fn render_issue(row: &Row) -> String {
    format!(
        "{} (Report UUID: {}, Issue Ordi: {})",
        field(row, "issue_code"),
        field(row, "report_uuid"),
        field(row, "issue_ordi")
    )
}

fn render_network(row: &Row) -> String {
    format!(
        "Client UUID: {}, Legislator ID: {}, Year: {}, Bills Sponsored: {}",
        field(row, "client_uuid"),
        field(row, "legislator_id"),
        field(row, "report_year"),
        field(row, "n_bills_sponsored")
    )
}

fn render_text(row: &Row) -> String {
    format!(
        "Issue Code: {}, Issue Text: {}",
        field(row, "issue_code"),
        field(row, "issue_text")
    )
}

fn render_quarter_network(row: &Row) -> String {
    format!(
        "Client UUID: {}, Legislator ID: {}, Year: {}, Quarter: {}, Bills Sponsored: {}",
        field(row, "client_uuid"),
        field(row, "legislator_id"),
        field(row, "report_year"),
        field(row, "report_quarter_code"),
        field(row, "n_bills_sponsored")
    )
}

fn render_bill_client_network(row: &Row) -> String {
    format!(
        "Bill Number: {}, Client UUID: {}, Issue Ordi: {}",
        field(row, "bill_number"),
        field(row, "client_uuid"),
        field(row, "issue_ordi")
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture row must be an object"),
        }
    }

    #[test]
    fn spec_table_is_indexed_by_kind() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.spec().kind, kind);
        }
    }

    #[test]
    fn endpoints() {
        assert_eq!(ResourceKind::Legislator.endpoint(), "/api/legislators");
        assert_eq!(
            ResourceKind::QuarterNetwork.endpoint(),
            "/api/quarter_level_networks"
        );
        assert_eq!(
            ResourceKind::BillClientNetwork.endpoint(),
            "/api/bill_client_networks"
        );
    }

    #[test]
    fn empty_rows_render_header_only() {
        assert_eq!(ResourceKind::Client.render(&[]), "Clients:");
        assert_eq!(
            ResourceKind::QuarterNetwork.render(&[]),
            "Quarter-Level Networks:"
        );
    }

    #[test]
    fn legislator_rendering() {
        let rows = vec![row(json!({
            "legislator_id": "M000303",
            "legislator_full_name": "John McCain",
            "legislator_gender": "M"
        }))];
        assert_eq!(
            ResourceKind::Legislator.render(&rows),
            "Legislators:\n  John McCain (ID: M000303)"
        );
    }

    #[test]
    fn numbers_render_bare_and_missing_fields_render_na() {
        let rows = vec![row(json!({
            "client_uuid": "44563806-56d2-5e99-84a1-95d22a7a69b3",
            "legislator_id": "M000303",
            "report_year": 2017,
            "n_bills_sponsored": null
        }))];
        assert_eq!(
            ResourceKind::Network.render(&rows),
            "Networks:\n  Client UUID: 44563806-56d2-5e99-84a1-95d22a7a69b3, \
             Legislator ID: M000303, Year: 2017, Bills Sponsored: N/A"
        );
    }

    #[test]
    fn bill_rendering_lists_each_row() {
        let rows = vec![
            row(json!({"bill_number": 4173, "congress_number": 111, "legislator_id": "F000339"})),
            row(json!({"bill_number": 1174, "congress_number": 114, "legislator_id": "G000558"})),
        ];
        insta::assert_snapshot!(ResourceKind::Bill.render(&rows), @r"
        Bills:
          4173 (Congress: 111, Sponsor: F000339)
          1174 (Congress: 114, Sponsor: G000558)
        ");
    }
}
