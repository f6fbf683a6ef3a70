use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::db::entity::watchlist_entry;
use crate::error::{ AppError, Result };

pub struct WatchlistRepository {
    db: DatabaseConnection,
}

impl WatchlistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Add a ticker to a user's watchlist. Tickers are stored uppercased;
    /// a duplicate (user, ticker) pair fails with `ConstraintViolation`.
    pub async fn add(
        &self,
        user_id: i64,
        ticker: &str,
        asset_type: &str,
        is_meme_coin: bool,
        added_price: Option<f64>,
        notes: Option<String>
    ) -> Result<watchlist_entry::Model> {
        let ticker = ticker.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(AppError::Validation("Ticker must not be empty".to_string()));
        }

        let entry = watchlist_entry::ActiveModel {
            user_id: Set(user_id),
            ticker: Set(ticker),
            asset_type: Set(asset_type.to_string()),
            is_meme_coin: Set(is_meme_coin),
            added_price: Set(added_price),
            notes: Set(notes),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let entry = entry.insert(&self.db).await?;
        Ok(entry)
    }

    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<watchlist_entry::Model>> {
        let entries = watchlist_entry::Entity
            ::find()
            .filter(watchlist_entry::Column::UserId.eq(user_id))
            .order_by_desc(watchlist_entry::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(entries)
    }

    pub async fn find_by_user_and_ticker(
        &self,
        user_id: i64,
        ticker: &str
    ) -> Result<Option<watchlist_entry::Model>> {
        let entry = watchlist_entry::Entity
            ::find()
            .filter(watchlist_entry::Column::UserId.eq(user_id))
            .filter(watchlist_entry::Column::Ticker.eq(ticker.trim().to_uppercase()))
            .one(&self.db).await?;

        Ok(entry)
    }

    /// Every watchlist row across all users, for event ingestion sweeps.
    pub async fn all_entries(&self) -> Result<Vec<watchlist_entry::Model>> {
        let entries = watchlist_entry::Entity
            ::find()
            .order_by_asc(watchlist_entry::Column::Id)
            .all(&self.db).await?;

        Ok(entries)
    }

    pub async fn update_notes(
        &self,
        user_id: i64,
        ticker: &str,
        notes: Option<String>
    ) -> Result<watchlist_entry::Model> {
        let entry = self
            .find_by_user_and_ticker(user_id, ticker).await?
            .ok_or_else(|| AppError::NotFound("Watchlist entry".to_string()))?;

        let mut entry: watchlist_entry::ActiveModel = entry.into();
        entry.notes = Set(notes);
        Ok(entry.update(&self.db).await?)
    }

    /// Unwatch a ticker. Fails with `NotFound` when the pair was not watched.
    pub async fn remove(&self, user_id: i64, ticker: &str) -> Result<()> {
        let deleted = watchlist_entry::Entity
            ::delete_many()
            .filter(watchlist_entry::Column::UserId.eq(user_id))
            .filter(watchlist_entry::Column::Ticker.eq(ticker.trim().to_uppercase()))
            .exec(&self.db).await?;

        if deleted.rows_affected == 0 {
            return Err(AppError::NotFound("Watchlist entry".to_string()));
        }

        Ok(())
    }
}
