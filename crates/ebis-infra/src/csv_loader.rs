//! CSV loader for delivery records
//!
//! Dispatch desks export the day's waybills from their plant software as
//! CSV. Turkish Excel installs commonly write Windows-1254, so the bytes
//! are decoded as UTF-8 when valid and as Windows-1254 otherwise.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use encoding_rs::WINDOWS_1254;
use thiserror::Error;

use ebis_domain::{DeliveryRecord, Field};
use ebis_types::Error as EbisError;

#[derive(Error, Debug)]
pub enum CsvLoaderError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid density class in row {row}: {value}")]
    InvalidDensity { row: usize, value: String },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("CSV file contains no records")]
    Empty,
}

impl From<CsvLoaderError> for EbisError {
    fn from(err: CsvLoaderError) -> Self {
        EbisError::Csv(err.to_string())
    }
}

/// Expected header row, one column per field in wire order
const COLUMNS: [&str; 17] = [
    "İrsaliye Seri No",
    "Vergi No",
    "Sevk Tarihi",
    "Miktar",
    "Toplam Miktar",
    "Dayanım Sınıfı",
    "Gelişim Oranı",
    "Kıvam Sınıfı",
    "Yoğunluk Sınıfı",
    "Klorür Sınıfı",
    "Dmax",
    "Su/Çimento Oranı",
    "Plaka",
    "Çimento Tipi",
    "Kimyasal Katkı",
    "Mineral Katkı",
    "Lifler",
];

/// Columns that must be present; the mix-specification columns may be
/// omitted when a preset supplies them
const REQUIRED_COLUMNS: usize = 5;

/// Load delivery records from a CSV file
///
/// The dispatch date column stays verbatim; the encoder validates it when
/// the record is actually encoded, so one bad row surfaces with its own
/// waybill series instead of failing the whole load.
pub fn load_delivery_records<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<DeliveryRecord>, CsvLoaderError> {
    let bytes = fs::read(path)?;
    let decoded = decode_bytes(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(decoded.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = resolve_columns(&headers)?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let row = result?;
        let row_num = row_idx + 2; // header is row 1

        records.push(parse_row(&row, &columns, row_num)?);
    }

    if records.is_empty() {
        return Err(CsvLoaderError::Empty);
    }

    Ok(records)
}

fn decode_bytes(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => {
            let (decoded, _, had_errors) = WINDOWS_1254.decode(bytes);
            if had_errors {
                eprintln!("Warning: some characters could not be decoded from Windows-1254");
            }
            Cow::Owned(decoded.into_owned())
        }
    }
}

/// Resolve each field's column index from the header row
///
/// Values are read by header name, never by position, so column order in
/// the export does not matter. Required columns must be present; the
/// mix-specification columns may be absent.
fn resolve_columns(
    headers: &csv::StringRecord,
) -> Result<[Option<usize>; 17], CsvLoaderError> {
    let mut columns = [None; 17];

    for (field_idx, name) in COLUMNS.iter().enumerate() {
        columns[field_idx] = headers.iter().position(|h| h == *name);

        if columns[field_idx].is_none() && field_idx < REQUIRED_COLUMNS {
            return Err(CsvLoaderError::MissingColumn(name.to_string()));
        }
    }

    Ok(columns)
}

fn parse_row(
    row: &csv::StringRecord,
    columns: &[Option<usize>; 17],
    row_num: usize,
) -> Result<DeliveryRecord, CsvLoaderError> {
    let mut record = DeliveryRecord::empty();

    for (field, column) in Field::ALL.iter().zip(columns.iter().copied()) {
        let value = column.and_then(|idx| row.get(idx)).unwrap_or("");
        if record.set(*field, value).is_err() {
            // only the density column can reject a value
            return Err(CsvLoaderError::InvalidDensity {
                row: row_num,
                value: value.to_string(),
            });
        }
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "İrsaliye Seri No,Vergi No,Sevk Tarihi,Miktar,Toplam Miktar,\
Dayanım Sınıfı,Gelişim Oranı,Kıvam Sınıfı,Yoğunluk Sınıfı,Klorür Sınıfı,Dmax,\
Su/Çimento Oranı,Plaka,Çimento Tipi,Kimyasal Katkı,Mineral Katkı,Lifler";

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_a_full_row() {
        let csv = format!(
            "{HEADER}\nA123456,0123456789,2019-09-25T13:30,12,60,C50,\"0,7\",S3,N,\
\"CL 0,2\",\"22,4\",\"0,41\",06EBS01,\"CEM II/A-S 42,5 N\",KATKI A,KATKI B,-\n"
        );
        let file = write_csv(&csv);

        let records = load_delivery_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.waybill_series, "A123456");
        assert_eq!(record.dispatch_date, "2019-09-25T13:30");
        assert_eq!(record.development_ratio, "0,7");
        assert_eq!(record.get(Field::DensityClass), "N");
        assert_eq!(record.fibers, "-");
    }

    #[test]
    fn short_rows_leave_trailing_fields_empty() {
        let csv = format!("{HEADER}\nA123456,0123456789,2019-09-25T13:30,12,60\n");
        let file = write_csv(&csv);

        let records = load_delivery_records(file.path()).unwrap();
        assert_eq!(records[0].amount_total, "60");
        assert_eq!(records[0].strength_class, "");
        assert_eq!(records[0].fibers, "");
    }

    #[test]
    fn reordered_columns_resolve_by_header_name() {
        // plant software is free to emit columns in any order; values must
        // follow their headers, not their positions
        let csv = "Vergi No,İrsaliye Seri No,Plaka,Sevk Tarihi,Miktar,Toplam Miktar\n\
0123456789,A123456,06EBS01,2019-09-25T13:30,12,60\n";
        let file = write_csv(csv);

        let records = load_delivery_records(file.path()).unwrap();
        let record = &records[0];
        assert_eq!(record.waybill_series, "A123456");
        assert_eq!(record.tax_number, "0123456789");
        assert_eq!(record.license_plate, "06EBS01");
        assert_eq!(record.amount_current, "12");
    }

    #[test]
    fn unknown_extra_columns_are_ignored() {
        let csv = "Not,İrsaliye Seri No,Vergi No,Sevk Tarihi,Miktar,Toplam Miktar\n\
açıklama,A123456,0123456789,2019-09-25T13:30,12,60\n";
        let file = write_csv(csv);

        let records = load_delivery_records(file.path()).unwrap();
        assert_eq!(records[0].waybill_series, "A123456");
        assert_eq!(records[0].tax_number, "0123456789");
    }

    #[test]
    fn missing_required_column_fails() {
        let file = write_csv("İrsaliye Seri No,Sevk Tarihi\nA1,2019-09-25T13:30\n");
        let err = load_delivery_records(file.path()).unwrap_err();
        assert!(matches!(err, CsvLoaderError::MissingColumn(col) if col == "Vergi No"));
    }

    #[test]
    fn bad_density_reports_row_number() {
        let csv = format!(
            "{HEADER}\nA1,1,2019-09-25T13:30,12,60,C50,,S3,N,,,,,,,,\n\
A2,1,2019-09-25T14:00,12,60,C50,,S3,Q,,,,,,,,\n"
        );
        let file = write_csv(&csv);

        let err = load_delivery_records(file.path()).unwrap_err();
        match err {
            CsvLoaderError::InvalidDensity { row, value } => {
                assert_eq!(row, 3);
                assert_eq!(value, "Q");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_file_is_an_error() {
        let file = write_csv(&format!("{HEADER}\n"));
        assert!(matches!(
            load_delivery_records(file.path()),
            Err(CsvLoaderError::Empty)
        ));
    }

    #[test]
    fn decodes_windows_1254_bytes() {
        // whole file in Windows-1254: İ is 0xDD, ş is 0xFE
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"\xDDrsaliye Seri No,Vergi No,Sevk Tarihi,Miktar,Toplam Miktar\n");
        bytes.extend_from_slice(b"A1234\xFE7,0123456789,2019-09-25T14:00,10,60\n");

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();
        file.flush().unwrap();

        let records = load_delivery_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].waybill_series, "A1234ş7");
    }
}
