//! Batched INSERT logic.

use crate::bootstrap::TABLE_NAME;
use crate::error::MySqlSinkError;
use mysql_async::prelude::*;
use mysql_async::{Params, Value};
use record_core::{Record, COLUMNS, DATE_FORMAT};
use tracing::debug;

/// Insert a batch of records with one parameterized multi-row INSERT.
///
/// Takes any `Queryable`, so the caller chooses the transaction scope (the
/// pipeline wraps all batches in a single top-level transaction). Absent
/// optional fields bind as SQL NULL. Empty batches are a no-op.
pub async fn insert_batch<Q>(conn: &mut Q, records: &[Record]) -> Result<u64, MySqlSinkError>
where
    Q: Queryable,
{
    if records.is_empty() {
        return Ok(0);
    }

    let sql = build_insert_sql(records.len());

    let mut params: Vec<Value> = Vec::with_capacity(records.len() * COLUMNS.len());
    for record in records {
        params.extend(record_params(record));
    }

    conn.exec_drop(sql, Params::Positional(params)).await?;
    debug!("Inserted batch of {} rows", records.len());

    Ok(records.len() as u64)
}

/// Build the multi-row INSERT statement with one `(?, ...)` group per row.
fn build_insert_sql(row_count: usize) -> String {
    let placeholders: Vec<&str> = COLUMNS.iter().map(|_| "?").collect();
    let row_template = format!("({})", placeholders.join(", "));
    let rows_template: Vec<&str> = (0..row_count).map(|_| row_template.as_str()).collect();

    format!(
        "INSERT INTO `{}` ({}) VALUES {}",
        TABLE_NAME,
        COLUMNS
            .iter()
            .map(|c| format!("`{c}`"))
            .collect::<Vec<_>>()
            .join(", "),
        rows_template.join(", ")
    )
}

/// Bind one record's fields, in column order.
///
/// Dates bind as ISO `%Y-%m-%d` strings, which MySQL accepts for DATE
/// columns.
fn record_params(record: &Record) -> Vec<Value> {
    vec![
        Value::from(record.name.as_str()),
        Value::from(record.email.as_str()),
        Value::from(record.address.as_str()),
        Value::from(record.phone.as_deref()),
        Value::from(record.birth_date.format(DATE_FORMAT).to_string()),
        Value::from(record.national_id.as_str()),
        Value::from(record.registration_date.format(DATE_FORMAT).to_string()),
        Value::from(
            record
                .payment_date
                .map(|d| d.format(DATE_FORMAT).to_string()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(phone: Option<&str>, payment_date: Option<NaiveDate>) -> Record {
        Record {
            name: "Jane Roe".to_string(),
            email: "jane.roe@example.com".to_string(),
            address: "12 Elm Street, Springfield, IL 62704".to_string(),
            phone: phone.map(str::to_string),
            birth_date: NaiveDate::from_ymd_opt(1984, 3, 17).unwrap(),
            national_id: "321-54-9876".to_string(),
            registration_date: NaiveDate::from_ymd_opt(2023, 11, 2).unwrap(),
            payment_date,
        }
    }

    #[test]
    fn test_insert_sql_single_row() {
        let sql = build_insert_sql(1);
        assert!(sql.starts_with("INSERT INTO `fake_records`"));
        assert!(sql.contains(
            "(`name`, `email`, `address`, `phone`, `birth_date`, `national_id`, \
             `registration_date`, `payment_date`)"
        ));
        assert!(sql.ends_with("VALUES (?, ?, ?, ?, ?, ?, ?, ?)"));
    }

    #[test]
    fn test_insert_sql_one_group_per_row() {
        let sql = build_insert_sql(3);
        assert_eq!(sql.matches("(?, ?, ?, ?, ?, ?, ?, ?)").count(), 3);
        assert_eq!(sql.matches('?').count(), 3 * COLUMNS.len());
    }

    #[test]
    fn test_params_bind_all_columns_in_order() {
        let params = record_params(&record(
            Some("+1-555-0134"),
            Some(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()),
        ));
        assert_eq!(params.len(), COLUMNS.len());
        assert_eq!(params[0], Value::from("Jane Roe"));
        assert_eq!(params[3], Value::from("+1-555-0134"));
        assert_eq!(params[4], Value::from("1984-03-17"));
        assert_eq!(params[7], Value::from("2025-06-30"));
    }

    #[test]
    fn test_absent_optionals_bind_null() {
        let params = record_params(&record(None, None));
        assert_eq!(params[3], Value::NULL);
        assert_eq!(params[7], Value::NULL);
    }
}
