use migration::{ Migrator, MigratorTrait };
use sea_orm::{ ConnectOptions, Database, DatabaseConnection };

/// Fresh in-memory SQLite database with the full schema applied. The pool is
/// capped at one connection: every pooled connection would otherwise open its
/// own empty in-memory database.
pub async fn setup() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);

    let db = Database::connect(options).await.expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}
