use crate::config::ApiConfig;
use crate::database::Database;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Returns the path to the finanças database
///
/// `[database] path` from the config wins. Otherwise the platform data
/// directory is used:
///
/// - **macOS**: `~/Library/Application Support/financas/financas.db`
/// - **Linux**: `~/.local/share/financas/financas.db`
/// - **Windows**: `%LOCALAPPDATA%\financas\financas.db`
pub fn get_db_path(config: &ApiConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = config.database.as_ref().and_then(|d| d.path.clone()) {
        return Ok(path);
    }

    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(data_dir.join("financas").join("financas.db"))
}

/// Open the database at `db_path`, creating and migrating it if needed
pub fn initialize_database(db_path: &Path) -> anyhow::Result<Arc<Database>> {
    let db = Database::new(db_path)?;
    Ok(Arc::new(db))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;

    #[test]
    fn test_configured_path_wins() {
        let config = ApiConfig {
            database: Some(DatabaseConfig {
                path: Some(PathBuf::from("/srv/financas/dados.db")),
            }),
            ..ApiConfig::default()
        };
        assert_eq!(
            get_db_path(&config).unwrap(),
            PathBuf::from("/srv/financas/dados.db")
        );
    }

    #[tokio::test]
    async fn test_reopening_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("financas.db");

        let goal = shared_types::Goal::new("Viagem", 3000.0);
        {
            let db = initialize_database(&path).unwrap();
            crate::database::goals::insert_goal(db.async_connection.clone(), &goal)
                .await
                .unwrap();
        }

        let db = initialize_database(&path).unwrap();
        let goals = crate::database::goals::list_goals(db.async_connection.clone())
            .await
            .unwrap();
        assert_eq!(goals, vec![goal]);
    }
}
