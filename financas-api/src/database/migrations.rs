use rusqlite::Connection;

/// Run all database migrations
pub fn run_migrations(conn: &Connection) -> anyhow::Result<()> {
    // Create metas (savings goals) table
    conn.execute(
        "CREATE TABLE IF NOT EXISTS metas (
            id VARCHAR PRIMARY KEY,
            nome VARCHAR NOT NULL,
            valor REAL NOT NULL,
            created_at BIGINT NOT NULL
        )",
        [],
    )?;

    // Create transactions table
    conn.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type VARCHAR NOT NULL CHECK (type IN ('income', 'expense')),
            category VARCHAR NOT NULL,
            amount REAL NOT NULL,
            description VARCHAR,
            date VARCHAR NOT NULL,
            meta_id VARCHAR,
            installments INTEGER,
            recurrence VARCHAR,
            recurrence_count INTEGER,
            created_at BIGINT NOT NULL,
            FOREIGN KEY (meta_id) REFERENCES metas (id) ON DELETE SET NULL
        )",
        [],
    )?;

    // Create indexes for performance
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_date
            ON transactions(date)",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_meta
            ON transactions(meta_id)",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('metas', 'transactions')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 2);
    }

    #[test]
    fn test_type_check_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO transactions (type, category, amount, date, created_at)
                VALUES ('transfer', 'outros', 10.0, '2026-01-01', 0)",
            [],
        );
        assert!(result.is_err());
    }
}
