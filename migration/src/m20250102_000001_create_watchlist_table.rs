use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(Watchlist::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Watchlist::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(ColumnDef::new(Watchlist::UserId).big_integer().not_null())
                .col(ColumnDef::new(Watchlist::Ticker).string().not_null())
                .col(ColumnDef::new(Watchlist::AssetType).string().not_null().default("crypto"))
                .col(ColumnDef::new(Watchlist::IsMemeCoin).boolean().not_null().default(false))
                .col(ColumnDef::new(Watchlist::AddedPrice).double())
                .col(ColumnDef::new(Watchlist::Notes).text())
                .col(
                    ColumnDef::new(Watchlist::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_watchlist_user")
                        .from(Watchlist::Table, Watchlist::UserId)
                        .to(Users::Table, Users::TelegramId)
                )
                .to_owned()
        ).await?;

        // A user cannot watch the same ticker twice
        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_watchlist_user_ticker")
                .table(Watchlist::Table)
                .col(Watchlist::UserId)
                .col(Watchlist::Ticker)
                .unique()
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_watchlist_user_id")
                .table(Watchlist::Table)
                .col(Watchlist::UserId)
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_watchlist_ticker")
                .table(Watchlist::Table)
                .col(Watchlist::Ticker)
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_watchlist_is_meme_coin")
                .table(Watchlist::Table)
                .col(Watchlist::IsMemeCoin)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Watchlist::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Watchlist {
    Table,
    Id,
    UserId,
    Ticker,
    AssetType,
    IsMemeCoin,
    AddedPrice,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    TelegramId,
}
