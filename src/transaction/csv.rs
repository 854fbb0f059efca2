//! Renders transactions as CSV text.

use csv::WriterBuilder;

use crate::Error;

use super::models::Transaction;

/// Compose CSV text from `transactions`.
///
/// The header row is always written, so an empty slice gives just the header.
/// Every row, including the last, ends with `\r\n`. Fields are only quoted when
/// they contain a comma, a quote or a line break.
///
/// # Errors
///
/// Returns an [Error::Csv] if the CSV writer fails.
pub fn to_csv(transactions: &[Transaction]) -> Result<String, Error> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(Transaction::CSV_HEADER)?;

    for transaction in transactions {
        writer.write_record(transaction.csv_fields())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::Csv(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::Csv(error.to_string()))
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::Csv(value.to_string())
    }
}
