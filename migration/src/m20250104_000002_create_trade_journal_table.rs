use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(TradeJournal::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(TradeJournal::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(ColumnDef::new(TradeJournal::UserId).big_integer().not_null())
                .col(ColumnDef::new(TradeJournal::Asset).string().not_null())
                .col(ColumnDef::new(TradeJournal::AssetType).string())
                .col(ColumnDef::new(TradeJournal::TradeType).string().not_null()) // "buy" or "sell"
                .col(ColumnDef::new(TradeJournal::Quantity).double().not_null())
                .col(ColumnDef::new(TradeJournal::Price).double().not_null())
                .col(ColumnDef::new(TradeJournal::TotalValue).double().not_null())
                .col(
                    ColumnDef::new(TradeJournal::ExecutedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .col(ColumnDef::new(TradeJournal::Notes).text())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_trade_journal_user")
                        .from(TradeJournal::Table, TradeJournal::UserId)
                        .to(Users::Table, Users::TelegramId)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_trade_journal_user_id")
                .table(TradeJournal::Table)
                .col(TradeJournal::UserId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TradeJournal::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TradeJournal {
    Table,
    Id,
    UserId,
    Asset,
    AssetType,
    TradeType,
    Quantity,
    Price,
    TotalValue,
    ExecutedAt,
    Notes,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    TelegramId,
}
