//! Ledger file ingestion
//!
//! Reads `date,category,amount` CSV ledgers into transactions. The
//! reader is strict: the first malformed row aborts the read with an
//! error naming the row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;

use crate::error::{FiscalError, FiscalResult};
use crate::models::{Money, Transaction, DEFAULT_DATE_FORMAT};

/// Parsing options for a ledger file
#[derive(Debug, Clone)]
pub struct LedgerFormat {
    /// strftime pattern for the date column
    pub date_format: String,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for LedgerFormat {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            delimiter: b',',
        }
    }
}

impl LedgerFormat {
    /// Create the default `date,category,amount` format
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date format
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Reader for CSV transaction ledgers
pub struct LedgerReader {
    format: LedgerFormat,
}

impl LedgerReader {
    /// Create a reader with the given format
    pub fn new(format: LedgerFormat) -> Self {
        Self { format }
    }

    /// Read a ledger file from disk
    pub fn read_path(&self, path: &Path) -> FiscalResult<Vec<Transaction>> {
        let file = File::open(path)
            .map_err(|e| FiscalError::Io(format!("failed to open {}: {}", path.display(), e)))?;
        self.read_from(file)
    }

    /// Read a ledger from any reader
    pub fn read_from<R: Read>(&self, reader: R) -> FiscalResult<Vec<Transaction>> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .delimiter(self.format.delimiter)
            .from_reader(reader);

        let mut transactions = Vec::new();
        for (idx, result) in csv_reader.records().enumerate() {
            let row = idx + 1;
            let record = result?;
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }

            let date = record.get(0).unwrap_or("");
            let category = record.get(1).unwrap_or("");
            let amount = record.get(2).unwrap_or("");

            // A leading row whose date and amount fields both fail to
            // parse is treated as a column header.
            if row == 1 && self.looks_like_header(date, amount) {
                continue;
            }

            if record.len() < 3 {
                return Err(FiscalError::Parse(format!(
                    "row {}: expected 'date,category,amount', got {} fields",
                    row,
                    record.len()
                )));
            }

            let txn = Transaction::from_fields(date, category, amount, &self.format.date_format)
                .map_err(|e| annotate_row(row, e))?;
            transactions.push(txn);
        }

        Ok(transactions)
    }

    fn looks_like_header(&self, date: &str, amount: &str) -> bool {
        NaiveDate::parse_from_str(date, &self.format.date_format).is_err()
            && Money::parse(amount).is_err()
    }
}

/// Read a ledger with the default format
pub fn read_ledger(path: &Path) -> FiscalResult<Vec<Transaction>> {
    LedgerReader::new(LedgerFormat::default()).read_path(path)
}

fn annotate_row(row: usize, err: FiscalError) -> FiscalError {
    match err {
        FiscalError::Parse(message) => FiscalError::Parse(format!("row {}: {}", row, message)),
        FiscalError::Validation(message) => {
            FiscalError::Validation(format!("row {}: {}", row, message))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn read_str(input: &str) -> FiscalResult<Vec<Transaction>> {
        LedgerReader::new(LedgerFormat::default()).read_from(input.as_bytes())
    }

    #[test]
    fn test_read_basic_ledger() {
        let input = "2024-01-01,Income,1000\n\
                     2024-01-02,Expense,500\n\
                     2024-01-03,Expense,300\n\
                     2024-01-04,Income,1500\n";
        let transactions = read_str(input).unwrap();
        assert_eq!(transactions.len(), 4);
        assert_eq!(transactions[0].category, Category::Income);
        assert_eq!(transactions[3].amount, Money::from_units(1500));
    }

    #[test]
    fn test_header_row_skipped() {
        let input = "date,category,amount\n2024-01-01,Income,1000\n";
        let transactions = read_str(input).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].amount, Money::from_units(1000));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let input = "2024-01-01,Income,1000\n\n2024-01-02,Expense,500\n";
        let transactions = read_str(input).unwrap();
        assert_eq!(transactions.len(), 2);
    }

    #[test]
    fn test_malformed_amount_names_row() {
        let input = "2024-01-01,Income,1000\n2024-01-02,Expense,lots\n";
        let err = read_str(input).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_malformed_date_names_row() {
        let input = "2024-01-01,Income,1000\nlast tuesday,Expense,5\n";
        let err = read_str(input).unwrap_err();
        assert!(err.to_string().contains("row 2"));
        assert!(err.to_string().contains("last tuesday"));
    }

    #[test]
    fn test_missing_fields_rejected() {
        let input = "2024-01-01,Income,1000\n2024-01-02,Expense\n";
        let err = read_str(input).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let input = "2024-01-01,Income,-1000\n";
        let err = read_str(input).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_custom_delimiter() {
        let format = LedgerFormat::new().with_delimiter(b';');
        let transactions = LedgerReader::new(format)
            .read_from("2024-01-01;Income;1000\n".as_bytes())
            .unwrap();
        assert_eq!(transactions.len(), 1);
    }

    #[test]
    fn test_custom_date_format() {
        let format = LedgerFormat::new().with_date_format("%m/%d/%Y");
        let transactions = LedgerReader::new(format)
            .read_from("01/31/2024,Income,50\n".as_bytes())
            .unwrap();
        assert_eq!(
            transactions[0].date,
            chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
    }

    #[test]
    fn test_read_path_missing_file() {
        let err = read_ledger(Path::new("/nonexistent/ledger.csv")).unwrap_err();
        assert!(matches!(err, FiscalError::Io(_)));
    }
}
