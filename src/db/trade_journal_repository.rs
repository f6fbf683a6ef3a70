use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::db::entity::trade_journal_entry;
use crate::enums::TradeType;
use crate::error::Result;

/// Append-only ledger of executed trades. No update or delete semantics.
pub struct TradeJournalRepository {
    db: DatabaseConnection,
}

impl TradeJournalRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record(
        &self,
        user_id: i64,
        asset: &str,
        asset_type: Option<String>,
        trade_type: TradeType,
        quantity: f64,
        price: f64,
        notes: Option<String>
    ) -> Result<trade_journal_entry::Model> {
        let entry = trade_journal_entry::ActiveModel {
            user_id: Set(user_id),
            asset: Set(asset.trim().to_uppercase()),
            asset_type: Set(asset_type),
            trade_type: Set(trade_type.as_str().to_string()),
            quantity: Set(quantity),
            price: Set(price),
            total_value: Set(quantity * price),
            executed_at: Set(chrono::Utc::now()),
            notes: Set(notes),
            ..Default::default()
        };

        let entry = entry.insert(&self.db).await?;
        Ok(entry)
    }

    pub async fn recent(&self, user_id: i64, limit: u64) -> Result<Vec<trade_journal_entry::Model>> {
        let entries = trade_journal_entry::Entity
            ::find()
            .filter(trade_journal_entry::Column::UserId.eq(user_id))
            .order_by_desc(trade_journal_entry::Column::ExecutedAt)
            .limit(limit)
            .all(&self.db).await?;

        Ok(entries)
    }

    /// Full ledger in creation order, for audit reads.
    pub async fn history(&self, user_id: i64) -> Result<Vec<trade_journal_entry::Model>> {
        let entries = trade_journal_entry::Entity
            ::find()
            .filter(trade_journal_entry::Column::UserId.eq(user_id))
            .order_by_asc(trade_journal_entry::Column::Id)
            .all(&self.db).await?;

        Ok(entries)
    }
}
