use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Singleton settings row per user, keyed by the external identity
        manager.create_table(
            Table::create()
                .table(AlertPreferences::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(AlertPreferences::UserId)
                        .big_integer()
                        .not_null()
                        .primary_key()
                )
                .col(
                    ColumnDef::new(AlertPreferences::LaunchAlertsEnabled)
                        .boolean()
                        .not_null()
                        .default(true)
                )
                .col(
                    ColumnDef::new(AlertPreferences::AlertFrequency)
                        .string()
                        .not_null()
                        .default("standard")
                )
                .col(
                    ColumnDef::new(AlertPreferences::MinRiskScore)
                        .integer()
                        .not_null()
                        .default(70)
                )
                .col(ColumnDef::new(AlertPreferences::LastAlertSent).timestamp_with_time_zone())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_alert_preferences_user")
                        .from(AlertPreferences::Table, AlertPreferences::UserId)
                        .to(Users::Table, Users::TelegramId)
                )
                .to_owned()
        ).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AlertPreferences::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AlertPreferences {
    Table,
    UserId,
    LaunchAlertsEnabled,
    AlertFrequency,
    MinRiskScore,
    LastAlertSent,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    TelegramId,
}
