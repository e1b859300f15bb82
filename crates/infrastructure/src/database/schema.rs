use super::entities::{sensor_data, vehicle_status_data};
use crate::config::DatabaseConfig;
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use tracing::info;

/// Open the shared connection pool and make sure both tables exist.
///
/// Every repository call checks a connection out of this pool for the
/// duration of one statement and returns it on drop, whatever the outcome.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections) // SQLite is single-writer
        .min_connections(1) // keeps in-memory databases alive
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    create_schema(&db).await?;

    info!(url = %config.url, "Database ready");
    Ok(db)
}

/// Idempotent `CREATE TABLE IF NOT EXISTS` for every entity, plus indexes.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut sensor_table = schema.create_table_from_entity(sensor_data::Entity);
    sensor_table.if_not_exists();
    db.execute(backend.build(&sensor_table)).await?;

    let mut status_table = schema.create_table_from_entity(vehicle_status_data::Entity);
    status_table.if_not_exists();
    db.execute(backend.build(&status_table)).await?;

    for mut index in schema.create_index_from_entity(sensor_data::Entity) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }

    Ok(())
}
