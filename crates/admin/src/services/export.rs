//! CSV export building.
//!
//! Back-office exports (analytics, products, orders) are generated
//! server-side as delimited text. Fields containing commas, quotes, or line
//! breaks are quoted with embedded quotes doubled, so spreadsheet imports
//! survive free-text columns like product names and addresses.

use std::borrow::Cow;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Quote a field when it contains a delimiter, quote, or line break.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        let mut escaped = String::with_capacity(field.len() + 2);
        escaped.push('"');
        for c in field.chars() {
            if c == '"' {
                escaped.push('"');
            }
            escaped.push(c);
        }
        escaped.push('"');
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(field)
    }
}

/// Incremental CSV document builder.
///
/// # Example
///
/// ```rust
/// use kawane_admin::services::export::CsvBuilder;
///
/// let mut csv = CsvBuilder::new(&["Date", "Orders", "Revenue"]);
/// csv.push_row(&["2025-08-01", "12", "4500000"]);
/// assert_eq!(csv.row_count(), 1);
/// let text = csv.finish();
/// assert!(text.starts_with("Date,Orders,Revenue\n"));
/// ```
#[derive(Debug)]
pub struct CsvBuilder {
    buf: String,
    rows: usize,
}

impl CsvBuilder {
    /// Start a document with a header row.
    #[must_use]
    pub fn new(headers: &[&str]) -> Self {
        let mut builder = Self {
            buf: String::new(),
            rows: 0,
        };
        builder.write_row(headers);
        builder
    }

    /// Append a data row.
    pub fn push_row<S: AsRef<str>>(&mut self, fields: &[S]) {
        self.write_row(fields);
        self.rows += 1;
    }

    /// Number of data rows (excluding the header).
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.rows
    }

    /// Finish and return the document.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }

    fn write_row<S: AsRef<str>>(&mut self, fields: &[S]) {
        let mut first = true;
        for field in fields {
            if !first {
                self.buf.push(',');
            }
            first = false;
            self.buf.push_str(&escape_field(field.as_ref()));
        }
        self.buf.push('\n');
    }
}

/// Build a CSV download response.
///
/// An export with no data rows returns `204 No Content` instead of a file
/// containing only the header.
#[must_use]
pub fn csv_response(filename: &str, csv: CsvBuilder) -> Response {
    if csv.row_count() == 0 {
        return StatusCode::NO_CONTENT.into_response();
    }

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv.finish(),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields_unquoted() {
        assert_eq!(escape_field("Linen shirt"), "Linen shirt");
        assert_eq!(escape_field("4500000"), "4500000");
    }

    #[test]
    fn test_comma_forces_quoting() {
        assert_eq!(escape_field("Bandung, Jawa Barat"), "\"Bandung, Jawa Barat\"");
    }

    #[test]
    fn test_embedded_quotes_doubled() {
        assert_eq!(
            escape_field("the \"Kenanga\" set"),
            "\"the \"\"Kenanga\"\" set\""
        );
    }

    #[test]
    fn test_newline_forces_quoting() {
        assert_eq!(escape_field("line one\nline two"), "\"line one\nline two\"");
    }

    #[test]
    fn test_builder_layout() {
        let mut csv = CsvBuilder::new(&["Name", "City"]);
        csv.push_row(&["Dewi", "Bandung, ID"]);
        csv.push_row(&["Raka", "Jakarta"]);

        assert_eq!(csv.row_count(), 2);
        assert_eq!(
            csv.finish(),
            "Name,City\nDewi,\"Bandung, ID\"\nRaka,Jakarta\n"
        );
    }

    #[test]
    fn test_empty_export_responds_no_content() {
        let csv = CsvBuilder::new(&["Date", "Revenue"]);
        let response = csv_response("empty.csv", csv);
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_populated_export_has_attachment_headers() {
        let mut csv = CsvBuilder::new(&["Date", "Revenue"]);
        csv.push_row(&["2025-08-01", "4500000"]);

        let response = csv_response("revenue.csv", csv);
        assert_eq!(response.status(), StatusCode::OK);

        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(disposition.contains("revenue.csv"));
    }
}
