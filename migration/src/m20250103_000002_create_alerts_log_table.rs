use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(AlertsLog::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(AlertsLog::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(ColumnDef::new(AlertsLog::UserId).big_integer().not_null())
                .col(ColumnDef::new(AlertsLog::Ticker).string().not_null())
                .col(ColumnDef::new(AlertsLog::AlertType).string().not_null())
                .col(ColumnDef::new(AlertsLog::Message).text().not_null())
                .col(
                    ColumnDef::new(AlertsLog::SentAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_alerts_log_user")
                        .from(AlertsLog::Table, AlertsLog::UserId)
                        .to(Users::Table, Users::TelegramId)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_alerts_log_user_id")
                .table(AlertsLog::Table)
                .col(AlertsLog::UserId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AlertsLog::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AlertsLog {
    Table,
    Id,
    UserId,
    Ticker,
    AlertType,
    Message,
    SentAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    TelegramId,
}
