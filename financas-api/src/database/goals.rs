use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};
use shared_types::Goal;

fn map_row_to_goal(row: &Row) -> rusqlite::Result<Goal> {
    Ok(Goal {
        id: row.get(0)?,
        nome: row.get(1)?,
        valor: row.get(2)?,
    })
}

/// Goals, newest first
pub async fn list_goals(conn: AsyncDbConnection) -> Result<Vec<Goal>> {
    let conn = conn.lock().await?;

    let mut stmt =
        conn.prepare("SELECT id, nome, valor FROM metas ORDER BY created_at DESC, rowid DESC")?;

    let rows = stmt.query_map([], map_row_to_goal)?;

    let mut goals = Vec::new();
    for row_result in rows {
        goals.push(row_result?);
    }

    Ok(goals)
}

pub async fn get_goal(conn: AsyncDbConnection, id: &str) -> Result<Option<Goal>> {
    let conn = conn.lock().await?;

    let goal = conn
        .query_row(
            "SELECT id, nome, valor FROM metas WHERE id = ?1",
            params![id],
            map_row_to_goal,
        )
        .optional()?;

    Ok(goal)
}

pub async fn insert_goal(conn: AsyncDbConnection, goal: &Goal) -> Result<()> {
    let conn = conn.lock().await?;
    let now = chrono::Utc::now().timestamp();

    conn.execute(
        "INSERT INTO metas (id, nome, valor, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![goal.id, goal.nome, goal.valor, now],
    )?;

    Ok(())
}

/// The goal as stored, or `None` when no goal had this id
pub async fn update_goal(
    conn: AsyncDbConnection,
    id: &str,
    nome: &str,
    valor: f64,
) -> Result<Option<Goal>> {
    let conn = conn.lock().await?;

    let updated = conn.execute(
        "UPDATE metas SET nome = ?1, valor = ?2 WHERE id = ?3",
        params![nome, valor, id],
    )?;

    if updated == 0 {
        return Ok(None);
    }

    Ok(Some(Goal {
        id: id.to_string(),
        nome: nome.to_string(),
        valor,
    }))
}

/// Returns false when no goal had this id
pub async fn delete_goal(conn: AsyncDbConnection, id: &str) -> Result<bool> {
    let conn = conn.lock().await?;

    let deleted = conn.execute("DELETE FROM metas WHERE id = ?1", params![id])?;

    Ok(deleted > 0)
}
