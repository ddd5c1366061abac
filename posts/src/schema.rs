//! Applying and reversing the schema changes held by the [`Migrator`].
//!
//! Schema changes run exclusively: one process at a time, never
//! concurrently with each other.

use entity::timestamps::Timestamped;
use migration::{Migrator, MigratorTrait, SchemaManager};
use sea_orm::{DatabaseConnection, DbErr, EntityName};

/// A schema change to run against the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaChange {
    /// Run every pending migration forward.
    Apply,
    /// Roll every applied migration back.
    Reverse,
}

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The backend rejected a forward schema change.
    #[error("Failed to apply schema changes: {0}")]
    Apply(#[source] DbErr),
    /// The backend rejected a backward schema change.
    #[error("Failed to reverse schema changes: {0}")]
    Reverse(#[source] DbErr),
    /// The live schema could not be inspected.
    #[error("Failed to inspect schema: {0}")]
    Inspect(#[source] DbErr),
}

/// Whether a known migration has been applied to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

/// Runs a schema change to completion.
///
/// Migrations already applied are skipped by `Apply`, and `Reverse` on a
/// database that was never migrated does nothing, so both leave the schema
/// in the same final state however often they run.
#[tracing::instrument(skip(db))]
pub async fn run(db: &DatabaseConnection, change: SchemaChange) -> Result<(), SchemaError> {
    match change {
        SchemaChange::Apply => {
            Migrator::up(db, None).await.map_err(SchemaError::Apply)?;
            tracing::info!("Database migrations applied successfully");
        }
        SchemaChange::Reverse => {
            Migrator::down(db, None)
                .await
                .map_err(SchemaError::Reverse)?;
            tracing::info!("Database migrations reversed successfully");
        }
    }
    Ok(())
}

/// Checks whether `table` exists in the live schema.
#[tracing::instrument(skip(db))]
pub async fn table_exists(db: &DatabaseConnection, table: &str) -> Result<bool, SchemaError> {
    SchemaManager::new(db)
        .has_table(table)
        .await
        .map_err(SchemaError::Inspect)
}

/// Names the timestamp columns of `E` that the live schema lacks.
///
/// A missing table lacks both. An empty list means the schema carries the
/// mapped columns.
#[tracing::instrument(skip(db))]
pub async fn missing_timestamp_columns<E: Timestamped>(
    db: &DatabaseConnection,
) -> Result<Vec<String>, SchemaError> {
    let manager = SchemaManager::new(db);
    let table = E::default().table_name().to_owned();
    let columns = E::TIMESTAMPS;
    let (created_at, updated_at) = columns.names();

    let table_present = manager
        .has_table(&table)
        .await
        .map_err(SchemaError::Inspect)?;
    let mut missing = Vec::new();
    for column in [created_at, updated_at] {
        let present = table_present
            && manager
                .has_column(&table, column)
                .await
                .map_err(SchemaError::Inspect)?;
        if !present {
            missing.push(column.to_owned());
        }
    }
    Ok(missing)
}

/// Lists every known migration, in order, with whether it is applied.
#[tracing::instrument(skip(db))]
pub async fn status(db: &DatabaseConnection) -> Result<Vec<MigrationState>, SchemaError> {
    Migrator::install(db).await.map_err(SchemaError::Inspect)?;
    let applied: Vec<String> = Migrator::get_applied_migrations(db)
        .await
        .map_err(SchemaError::Inspect)?
        .iter()
        .map(|migration| migration.name().to_string())
        .collect();

    let states = Migrator::migrations()
        .iter()
        .map(|migration| {
            let name = migration.name().to_string();
            MigrationState {
                applied: applied.contains(&name),
                name,
            }
        })
        .collect();
    Ok(states)
}
