use crate::database::AsyncDbConnection;
use anyhow::Result;
use chrono::NaiveDate;
use extractors::installment_dates;
use rusqlite::{params, Connection, OptionalExtension, Row};
use shared_types::{CreateTransactionRequest, Transaction, TransactionType, MONTHLY_RECURRENCE};

/// A row names a goal that is not stored
#[derive(Debug, thiserror::Error)]
#[error("Meta não encontrada: {0}")]
pub struct GoalNotFound(pub String);

const SELECT_COLUMNS: &str = "SELECT id, type, category, amount, description, date, meta_id,
        installments, recurrence, recurrence_count, created_at
     FROM transactions";

/// A row about to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub transaction_type: TransactionType,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    pub date: String,
    pub meta_id: Option<String>,
    pub installments: Option<u32>,
    pub recurrence: Option<String>,
    pub recurrence_count: Option<u32>,
}

/// Expand a create request into the rows it stands for.
///
/// An installment request (2 to 12) becomes one row per installment, dated
/// monthly from the month after `request.date` and labelled "Parcela i/N".
/// Any other `installments` value is not stored.
pub fn expand_request(request: &CreateTransactionRequest) -> Result<Vec<NewTransaction>> {
    let base_date = NaiveDate::parse_from_str(&request.date, "%Y-%m-%d")?;
    let meta_id = request.goal_id().map(str::to_string);

    let Some(count) = request.installment_count() else {
        return Ok(vec![NewTransaction {
            transaction_type: request.transaction_type,
            category: request.category.clone(),
            amount: request.amount,
            description: request.description.clone(),
            date: base_date.format("%Y-%m-%d").to_string(),
            meta_id,
            installments: None,
            recurrence: request.recurrence.clone().filter(|r| !r.trim().is_empty()),
            recurrence_count: request.recurrence_count.filter(|n| *n > 0),
        }]);
    };

    let rows = installment_dates(base_date, count)
        .into_iter()
        .enumerate()
        .map(|(i, date)| {
            let label = format!("Parcela {}/{}", i + 1, count);
            let description = match request.description.as_deref().map(str::trim) {
                Some(text) if !text.is_empty() => format!("{} - {}", text, label),
                _ => label,
            };

            NewTransaction {
                transaction_type: request.transaction_type,
                category: request.category.clone(),
                amount: request.amount,
                description: Some(description),
                date: date.format("%Y-%m-%d").to_string(),
                meta_id: meta_id.clone(),
                installments: Some(count),
                recurrence: Some(MONTHLY_RECURRENCE.to_string()),
                recurrence_count: Some(count),
            }
        })
        .collect();

    Ok(rows)
}

/// Insert every row inside one SQLite transaction.
///
/// Either all rows are stored or, on the first failure, none are. A row whose
/// goal is missing fails with [`GoalNotFound`].
pub fn insert_all(conn: &mut Connection, rows: &[NewTransaction]) -> Result<Vec<Transaction>> {
    let now = chrono::Utc::now().timestamp();
    let tx = conn.transaction()?;

    let mut created = Vec::with_capacity(rows.len());
    for row in rows {
        let id: i64 = tx
            .query_row(
                "INSERT INTO transactions
                 (type, category, amount, description, date, meta_id, installments,
                  recurrence, recurrence_count, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                 RETURNING id",
                params![
                    row.transaction_type.as_str(),
                    &row.category,
                    row.amount,
                    row.description.as_deref(),
                    &row.date,
                    row.meta_id.as_deref(),
                    row.installments,
                    row.recurrence.as_deref(),
                    row.recurrence_count,
                    now,
                ],
                |r| r.get(0),
            )
            .map_err(|e| foreign_key_error(e, row.meta_id.as_deref()))?;

        created.push(Transaction {
            id,
            transaction_type: row.transaction_type,
            category: row.category.clone(),
            amount: row.amount,
            description: row.description.clone(),
            date: row.date.clone(),
            meta_id: row.meta_id.clone(),
            installments: row.installments,
            recurrence: row.recurrence.clone(),
            recurrence_count: row.recurrence_count,
            created_at: now,
        });
    }

    tx.commit()?;

    Ok(created)
}

fn foreign_key_error(error: rusqlite::Error, meta_id: Option<&str>) -> anyhow::Error {
    if let (rusqlite::Error::SqliteFailure(err, _), Some(meta_id)) = (&error, meta_id) {
        if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY {
            return GoalNotFound(meta_id.to_string()).into();
        }
    }
    error.into()
}

pub async fn create_transactions(
    conn: AsyncDbConnection,
    request: &CreateTransactionRequest,
) -> Result<Vec<Transaction>> {
    let rows = expand_request(request)?;
    let mut conn = conn.lock().await?;
    insert_all(&mut conn, &rows)
}

fn map_row_to_transaction(row: &Row) -> rusqlite::Result<Transaction> {
    let type_str: String = row.get(1)?;
    let transaction_type = TransactionType::parse(&type_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            format!("unknown transaction type {:?}", type_str).into(),
        )
    })?;

    Ok(Transaction {
        id: row.get(0)?,
        transaction_type,
        category: row.get(2)?,
        amount: row.get(3)?,
        description: row.get(4)?,
        date: row.get(5)?,
        meta_id: row.get(6)?,
        installments: row.get(7)?,
        recurrence: row.get(8)?,
        recurrence_count: row.get(9)?,
        created_at: row.get(10)?,
    })
}

/// All transactions, latest date first
pub async fn list_transactions(conn: AsyncDbConnection) -> Result<Vec<Transaction>> {
    let conn = conn.lock().await?;

    let mut stmt = conn.prepare(&format!("{} ORDER BY date DESC, id DESC", SELECT_COLUMNS))?;

    let rows = stmt.query_map([], map_row_to_transaction)?;

    let mut transactions = Vec::new();
    for row_result in rows {
        transactions.push(row_result?);
    }

    Ok(transactions)
}

pub async fn get_transaction(conn: AsyncDbConnection, id: i64) -> Result<Option<Transaction>> {
    let conn = conn.lock().await?;

    let transaction = conn
        .query_row(
            &format!("{} WHERE id = ?1", SELECT_COLUMNS),
            params![id],
            map_row_to_transaction,
        )
        .optional()?;

    Ok(transaction)
}

/// Returns false when no transaction had this id
pub async fn delete_transaction(conn: AsyncDbConnection, id: i64) -> Result<bool> {
    let conn = conn.lock().await?;

    let deleted = conn.execute("DELETE FROM transactions WHERE id = ?1", params![id])?;

    Ok(deleted > 0)
}
