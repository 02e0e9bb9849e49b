//! CSV export of transactions

use std::io::Write;

use serde::Serialize;

use crate::error::SpendResult;
use crate::models::Transaction;

#[derive(Serialize)]
struct TransactionRecord<'a> {
    id: String,
    date: String,
    description: &'a str,
    category: &'a str,
    amount: String,
}

impl<'a> From<&'a Transaction> for TransactionRecord<'a> {
    fn from(txn: &'a Transaction) -> Self {
        Self {
            id: txn.id.as_uuid().to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            description: &txn.description,
            category: &txn.category,
            amount: txn.amount.format_with_symbol(""),
        }
    }
}

/// Write transactions as CSV with a header row
///
/// Returns the number of data rows written.
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> SpendResult<usize> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    if transactions.is_empty() {
        csv_writer.write_record(["id", "date", "description", "category", "amount"])?;
    }
    for txn in transactions {
        csv_writer.serialize(TransactionRecord::from(txn))?;
    }

    csv_writer.flush()?;
    Ok(transactions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_export_transactions() {
        let txn = Transaction::new(
            Money::from_cents(1250),
            "Lunch, with friends",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            "Food",
        );
        let mut buffer = Vec::new();

        let rows = export_transactions_csv(&[txn.clone()], &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(rows, 1);
        assert_eq!(lines[0], "id,date,description,category,amount");
        assert_eq!(
            lines[1],
            format!("{},2024-05-01,\"Lunch, with friends\",Food,12.50", txn.id.as_uuid())
        );
    }

    #[test]
    fn test_export_empty_writes_header() {
        let mut buffer = Vec::new();
        assert_eq!(export_transactions_csv(&[], &mut buffer).unwrap(), 0);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "id,date,description,category,amount\n"
        );
    }
}
