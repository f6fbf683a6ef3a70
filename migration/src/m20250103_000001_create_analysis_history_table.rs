use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(AnalysisHistory::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(AnalysisHistory::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(ColumnDef::new(AnalysisHistory::UserId).big_integer().not_null())
                .col(ColumnDef::new(AnalysisHistory::Ticker).string().not_null())
                .col(ColumnDef::new(AnalysisHistory::AssetType).string())
                .col(ColumnDef::new(AnalysisHistory::RiskScore).integer().not_null())
                .col(ColumnDef::new(AnalysisHistory::RiskLevel).string())
                .col(ColumnDef::new(AnalysisHistory::AnalysisData).text()) // opaque payload, caller-encoded
                .col(
                    ColumnDef::new(AnalysisHistory::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_analysis_history_user")
                        .from(AnalysisHistory::Table, AnalysisHistory::UserId)
                        .to(Users::Table, Users::TelegramId)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_analysis_history_user_id")
                .table(AnalysisHistory::Table)
                .col(AnalysisHistory::UserId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AnalysisHistory::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AnalysisHistory {
    Table,
    Id,
    UserId,
    Ticker,
    AssetType,
    RiskScore,
    RiskLevel,
    AnalysisData,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    TelegramId,
}
