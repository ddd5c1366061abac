use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

/// Opens a private in-memory SQLite database.
///
/// The pool holds exactly one connection; every connection to
/// `sqlite::memory:` would otherwise see its own empty database.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .try_init();
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    Ok(Database::connect(options).await?)
}

#[allow(dead_code)] // not every test binary migrates
pub async fn setup_db() -> anyhow::Result<DatabaseConnection> {
    let db = connect().await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Column names of `table`, in declaration order.
#[allow(dead_code)]
pub async fn column_names(db: &DatabaseConnection, table: &str) -> anyhow::Result<Vec<String>> {
    let rows = db
        .query_all(Statement::from_string(
            db.get_database_backend(),
            format!("PRAGMA table_info({})", table),
        ))
        .await?;
    let mut names = Vec::with_capacity(rows.len());
    for row in rows {
        names.push(row.try_get::<String>("", "name")?);
    }
    Ok(names)
}
