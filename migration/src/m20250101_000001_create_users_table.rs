use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(Users::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Users::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(ColumnDef::new(Users::TelegramId).big_integer().not_null().unique_key())
                .col(ColumnDef::new(Users::Username).string())
                .col(ColumnDef::new(Users::Status).string().not_null().default("active"))
                .col(ColumnDef::new(Users::Language).string().not_null().default("en"))
                .col(ColumnDef::new(Users::AlertsEnabled).boolean().not_null().default(false))
                .col(
                    ColumnDef::new(Users::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned()
        ).await?;

        // Child tables reference telegram_id, so the unique index doubles as FK target
        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_users_telegram_id")
                .table(Users::Table)
                .col(Users::TelegramId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    TelegramId,
    Username,
    Status,
    Language,
    AlertsEnabled,
    CreatedAt,
}
