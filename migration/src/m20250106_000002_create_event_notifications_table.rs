use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Deliberately no uniqueness on (user_id, event_id): re-notification
        // is permitted at the schema level
        manager.create_table(
            Table::create()
                .table(EventNotifications::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(EventNotifications::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(ColumnDef::new(EventNotifications::UserId).big_integer().not_null())
                .col(ColumnDef::new(EventNotifications::EventId).integer().not_null())
                .col(
                    ColumnDef::new(EventNotifications::SentAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_event_notifications_user")
                        .from(EventNotifications::Table, EventNotifications::UserId)
                        .to(Users::Table, Users::TelegramId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_event_notifications_event")
                        .from(EventNotifications::Table, EventNotifications::EventId)
                        .to(LaunchEvents::Table, LaunchEvents::Id)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_event_notifications_user_id")
                .table(EventNotifications::Table)
                .col(EventNotifications::UserId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EventNotifications::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EventNotifications {
    Table,
    Id,
    UserId,
    EventId,
    SentAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    TelegramId,
}

#[derive(DeriveIden)]
enum LaunchEvents {
    Table,
    Id,
}
