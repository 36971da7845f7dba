// soapdump - core/export.rs
//
// CSV and JSON export of transaction records.
// Core layer: writes to any Write trait object.

use crate::core::model::{column_names, TransactionRecord};
use crate::util::error::ExportError;
use std::io::Write;

/// Export records as CSV with a header row of column names.
///
/// Unlike raw mode, values containing commas or quotes are quoted.
pub fn export_csv<W: Write>(
    records: &[TransactionRecord],
    writer: W,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(column_names())
        .map_err(ExportError::Csv)?;

    let mut count = 0;
    for record in records {
        csv_writer
            .write_record(record.values().iter().map(|v| v.as_bytes()))
            .map_err(ExportError::Csv)?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}

/// Export records as a pretty-printed JSON array of objects.
pub fn export_json<W: Write>(
    records: &[TransactionRecord],
    mut writer: W,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(&mut writer, records).map_err(ExportError::Json)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(seq: u64, first_name: &str) -> TransactionRecord {
        TransactionRecord {
            first_name: first_name.to_string(),
            amount: "10.00".to_string(),
            status: "Success".to_string(),
            ..TransactionRecord::new(seq)
        }
    }

    #[test]
    fn test_csv_export() {
        let records = vec![make_record(1, "Jane"), make_record(2, "Smith, Jr")];
        let mut buf = Vec::new();
        let count = export_csv(&records, &mut buf).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let mut lines = output.lines();
        assert!(lines.next().unwrap().starts_with("TRANS_NUM,AMOUNT,CURRENCY"));
        assert!(lines.next().unwrap().starts_with("1,10.00,,Jane,"));
        assert!(lines.next().unwrap().contains("\"Smith, Jr\""));
    }

    #[test]
    fn test_csv_export_empty_still_has_header() {
        let mut buf = Vec::new();
        assert_eq!(export_csv(&[], &mut buf).unwrap(), 0);
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_json_export() {
        let records = vec![make_record(1, "Jane")];
        let mut buf = Vec::new();
        let count = export_json(&records, &mut buf).unwrap();
        assert_eq!(count, 1);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["sequence_number"], 1);
        assert_eq!(value[0]["first_name"], "Jane");
        assert_eq!(value[0]["transaction_id"], "");
    }
}
