//! Integration tests for CSV export building.

use kawane_admin::services::export::{CsvBuilder, csv_response};

#[test]
fn test_header_row_always_first() {
    let mut csv = CsvBuilder::new(&["Order", "Customer", "Total"]);
    csv.push_row(&["KWN-2025-0001", "Dewi", "825000"]);

    let text = csv.finish();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Order,Customer,Total"));
    assert_eq!(lines.next(), Some("KWN-2025-0001,Dewi,825000"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_free_text_fields_survive_spreadsheet_hazards() {
    let mut csv = CsvBuilder::new(&["Name", "Address"]);
    csv.push_row(&["Batik \"Parang\" Scarf", "Jl. Kenanga 5, Bandung"]);
    csv.push_row(&["Plain", "line one\nline two"]);

    let text = csv.finish();
    assert!(text.contains("\"Batik \"\"Parang\"\" Scarf\""));
    assert!(text.contains("\"Jl. Kenanga 5, Bandung\""));
    assert!(text.contains("\"line one\nline two\""));
}

#[test]
fn test_row_count_excludes_header() {
    let mut csv = CsvBuilder::new(&["Date", "Revenue"]);
    assert_eq!(csv.row_count(), 0);

    csv.push_row(&["2025-08-01", "4500000"]);
    csv.push_row(&["2025-08-02", "3250000"]);
    assert_eq!(csv.row_count(), 2);
}

#[test]
fn test_empty_export_is_204_not_empty_file() {
    let csv = CsvBuilder::new(&["Date", "Revenue"]);
    let response = csv_response("revenue.csv", csv);
    assert_eq!(response.status(), 204);
}

#[test]
fn test_export_is_a_csv_attachment() {
    let mut csv = CsvBuilder::new(&["Date", "Revenue"]);
    csv.push_row(&["2025-08-01", "4500000"]);

    let response = csv_response("revenue-30d.csv", csv);
    assert_eq!(response.status(), 200);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/csv"));

    let disposition = response
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(disposition.contains("attachment"));
    assert!(disposition.contains("revenue-30d.csv"));
}
