use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(LaunchEvents::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(LaunchEvents::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(ColumnDef::new(LaunchEvents::Asset).string().not_null())
                .col(ColumnDef::new(LaunchEvents::AssetType).string().not_null().default("crypto"))
                .col(ColumnDef::new(LaunchEvents::EventType).string().not_null())
                .col(ColumnDef::new(LaunchEvents::EventDate).date().not_null())
                .col(ColumnDef::new(LaunchEvents::Description).text())
                .col(ColumnDef::new(LaunchEvents::Source).string())
                .col(ColumnDef::new(LaunchEvents::RiskScore).double())
                .col(ColumnDef::new(LaunchEvents::RiskLevel).string())
                .col(ColumnDef::new(LaunchEvents::Confidence).double())
                .col(ColumnDef::new(LaunchEvents::Notified).boolean().not_null().default(false))
                .col(
                    ColumnDef::new(LaunchEvents::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned()
        ).await?;

        // Duplicate ingestion guard
        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_launch_events_asset_date_type")
                .table(LaunchEvents::Table)
                .col(LaunchEvents::Asset)
                .col(LaunchEvents::EventDate)
                .col(LaunchEvents::EventType)
                .unique()
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_launch_events_event_date")
                .table(LaunchEvents::Table)
                .col(LaunchEvents::EventDate)
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_launch_events_asset")
                .table(LaunchEvents::Table)
                .col(LaunchEvents::Asset)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(LaunchEvents::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum LaunchEvents {
    Table,
    Id,
    Asset,
    AssetType,
    EventType,
    EventDate,
    Description,
    Source,
    RiskScore,
    RiskLevel,
    Confidence,
    Notified,
    CreatedAt,
}
