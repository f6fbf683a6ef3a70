use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(Portfolio::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Portfolio::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(ColumnDef::new(Portfolio::UserId).big_integer().not_null())
                .col(ColumnDef::new(Portfolio::Asset).string().not_null())
                .col(ColumnDef::new(Portfolio::AssetType).string())
                .col(ColumnDef::new(Portfolio::Quantity).double().not_null())
                .col(ColumnDef::new(Portfolio::EntryPrice).double().not_null())
                .col(ColumnDef::new(Portfolio::CurrentPrice).double())
                .col(ColumnDef::new(Portfolio::ProfitLoss).double())
                .col(ColumnDef::new(Portfolio::ProfitLossPct).double())
                .col(
                    ColumnDef::new(Portfolio::DateAdded)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .col(
                    ColumnDef::new(Portfolio::LastUpdated)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_portfolio_user")
                        .from(Portfolio::Table, Portfolio::UserId)
                        .to(Users::Table, Users::TelegramId)
                )
                .to_owned()
        ).await?;

        // One open position per asset per user
        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_portfolio_user_asset")
                .table(Portfolio::Table)
                .col(Portfolio::UserId)
                .col(Portfolio::Asset)
                .unique()
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_portfolio_user_id")
                .table(Portfolio::Table)
                .col(Portfolio::UserId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Portfolio::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Portfolio {
    Table,
    Id,
    UserId,
    Asset,
    AssetType,
    Quantity,
    EntryPrice,
    CurrentPrice,
    ProfitLoss,
    ProfitLossPct,
    DateAdded,
    LastUpdated,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    TelegramId,
}
