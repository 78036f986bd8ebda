//! CSV export for fetched record sets.

use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};

/// Render records as CSV text.
///
/// Columns are the union of all object keys, in first-appearance order
/// across the record list. Missing fields and JSON nulls render as empty
/// cells, strings render verbatim, and anything else renders as its JSON
/// text. Non-object records contribute no columns and render as a blank
/// row. An empty record list yields an empty string.
pub fn records_to_csv(records: &[Value]) -> Result<String> {
    if records.is_empty() {
        return Ok(String::new());
    }

    let mut columns: Vec<&str> = Vec::new();
    for record in records {
        if let Value::Object(map) = record {
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key);
                }
            }
        }
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&columns)?;
    for record in records {
        let row: Vec<String> = columns.iter().map(|col| cell(record, col)).collect();
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| Error::new(ErrorKind::Csv(err.to_string())))?;
    String::from_utf8(bytes).map_err(|err| Error::new(ErrorKind::Csv(err.to_string())))
}

fn cell(record: &Value, column: &str) -> String {
    match record.get(column) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
