//! Table bootstrap
//!
//! Creates the tables from the SeaORM entities when they are missing, so a
//! fresh database needs no separate migration step.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::entity::{departments, employees};

/// Create every table the service uses, skipping those that already exist
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(db, departments::Entity).await?;
    create_table(db, employees::Entity).await?;
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(entity);
    statement.if_not_exists();

    tracing::debug!("Ensuring table {}", entity.table_name());
    db.execute(backend.build(&statement)).await?;
    Ok(())
}
