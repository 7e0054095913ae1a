use super::*;

fn load_rows(name: &str) -> Vec<Row> {
    let json_str = match name {
        "legislators" => include_str!("../../lobbyview_api/tests/fixtures/legislators.json"),
        "clients" => include_str!("../../lobbyview_api/tests/fixtures/clients_page2.json"),
        "bill_client_networks" => {
            include_str!("../../lobbyview_api/tests/fixtures/bill_client_networks.json")
        }
        _ => panic!("no fixture named {}", name),
    };
    let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
    serde_json::from_value(resp["data"].clone()).unwrap()
}

fn csv_string(rows: &[Row]) -> String {
    let mut buf = Vec::new();
    write_csv(&mut buf, rows).unwrap();
    String::from_utf8(buf).unwrap()
}

// -- format parsing --

#[test]
fn test_output_format_parse() {
    assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::parse("table"), OutputFormat::Table);
    assert_eq!(OutputFormat::parse("csv"), OutputFormat::Csv);
    assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
    assert_eq!(OutputFormat::parse("anything-else"), OutputFormat::Text);
}

// -- Table output tests --

#[test]
fn test_table_uses_rendering_columns() {
    let rows = load_rows("legislators");
    let table = build_table(ResourceKind::Legislator, &rows);
    let header = table.lines().nth(1).unwrap();
    assert!(header.contains("legislator_full_name"));
    assert!(header.contains("legislator_id"));
    assert!(!header.contains("legislator_gender"));
    assert!(table.contains("John McCain"));
    assert!(table.contains("M000303"));
}

#[test]
fn test_table_missing_values_show_na() {
    let rows = load_rows("clients");
    let table = build_table(ResourceKind::Client, &rows);
    assert!(table.contains("Micro Focus"));

    let mut row = rows[0].clone();
    row.remove("client_uuid");
    let table = build_table(ResourceKind::Client, &[row]);
    assert!(table.contains("N/A"));
}

#[test]
fn test_table_empty_has_header_only() {
    let table = build_table(ResourceKind::BillClientNetwork, &[]);
    assert!(table.contains("bill_number"));
    assert!(table.contains("issue_ordi"));
    // top border, header, bottom border
    assert_eq!(table.lines().count(), 3);
}

// -- CSV output tests --

#[test]
fn test_csv_headers_are_row_keys() {
    let rows = load_rows("bill_client_networks");
    let csv = csv_string(&rows);
    let mut lines = csv.lines();
    let header = lines.next().unwrap();
    assert!(header.contains("bill_chamber"));
    assert!(header.contains("report_uuid"));
    assert_eq!(header.split(',').count(), 7);

    let record = lines.next().unwrap();
    assert!(record.contains("44563806-56d2-5e99-84a1-95d22a7a69b3"));
    assert!(record.contains("1174"));
}

#[test]
fn test_csv_null_values_flatten_to_na() {
    let rows = load_rows("clients");
    let csv = csv_string(&rows);
    assert_eq!(csv.lines().count(), 4);
    let micro_focus = csv.lines().find(|l| l.contains("Micro Focus")).unwrap();
    assert!(micro_focus.contains("N/A"));
}

#[test]
fn test_csv_union_of_keys() {
    let rows: Vec<Row> = serde_json::from_value(serde_json::json!([
        {"issue_code": "TRD"},
        {"issue_code": "HCR", "issue_text": "covid, testing"}
    ]))
    .unwrap();
    let csv = csv_string(&rows);
    assert_eq!(
        csv,
        "issue_code,issue_text\nTRD,N/A\nHCR,\"covid, testing\"\n"
    );
}

#[test]
fn test_csv_empty_rows_write_nothing() {
    assert_eq!(csv_string(&[]), "");
}

// -- JSON output tests --

#[test]
fn test_json_rows_serializable() {
    let rows = load_rows("legislators");
    let val = serde_json::to_value(&rows).unwrap();
    assert!(val.is_array());
    assert_eq!(val[0]["legislator_govtrack_id"], 300071);
}
