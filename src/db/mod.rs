use sea_orm::{ entity::prelude::*, DatabaseConnection, QueryOrder, Set, TransactionTrait };

use crate::error::{ AppError, Result };

pub mod entity;
pub use entity::*;

mod watchlist_repository;
pub use watchlist_repository::WatchlistRepository;

mod analysis_repository;
pub use analysis_repository::AnalysisRepository;

mod alert_log_repository;
pub use alert_log_repository::AlertLogRepository;

mod portfolio_repository;
pub use portfolio_repository::PortfolioRepository;

mod trade_journal_repository;
pub use trade_journal_repository::TradeJournalRepository;

mod launch_event_repository;
pub use launch_event_repository::LaunchEventRepository;

mod alert_preference_repository;
pub use alert_preference_repository::AlertPreferenceRepository;

mod event_notification_repository;
pub use event_notification_repository::EventNotificationRepository;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        telegram_id: i64,
        username: Option<String>
    ) -> Result<entity::user::Model> {
        let user = entity::user::ActiveModel {
            telegram_id: Set(telegram_id),
            username: Set(username),
            status: Set("active".to_string()),
            language: Set("en".to_string()),
            alerts_enabled: Set(false),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let user = user.insert(&self.db).await?;
        Ok(user)
    }

    pub async fn find_by_telegram_id(&self, telegram_id: i64) -> Result<entity::user::Model> {
        entity::user::Entity
            ::find()
            .filter(entity::user::Column::TelegramId.eq(telegram_id))
            .one(&self.db).await?
            .ok_or_else(|| AppError::NotFound("User".to_string()))
    }

    /// Registration entry point: a second call with the same telegram_id
    /// returns the existing row instead of failing.
    pub async fn get_or_create(
        &self,
        telegram_id: i64,
        username: Option<String>
    ) -> Result<entity::user::Model> {
        if
            let Some(user) = entity::user::Entity
                ::find()
                .filter(entity::user::Column::TelegramId.eq(telegram_id))
                .one(&self.db).await?
        {
            return Ok(user);
        }

        match self.create(telegram_id, username).await {
            Ok(user) => Ok(user),
            // Lost a race against a concurrent registration; the row exists now
            Err(AppError::ConstraintViolation(_)) => self.find_by_telegram_id(telegram_id).await,
            Err(e) => Err(e),
        }
    }

    pub async fn set_language(&self, telegram_id: i64, language: &str) -> Result<entity::user::Model> {
        let user = self.find_by_telegram_id(telegram_id).await?;

        let mut user: entity::user::ActiveModel = user.into();
        user.language = Set(language.to_string());
        Ok(user.update(&self.db).await?)
    }

    pub async fn set_status(&self, telegram_id: i64, status: &str) -> Result<entity::user::Model> {
        let user = self.find_by_telegram_id(telegram_id).await?;

        let mut user: entity::user::ActiveModel = user.into();
        user.status = Set(status.to_string());
        Ok(user.update(&self.db).await?)
    }

    pub async fn set_alerts_enabled(
        &self,
        telegram_id: i64,
        enabled: bool
    ) -> Result<entity::user::Model> {
        let user = self.find_by_telegram_id(telegram_id).await?;

        let mut user: entity::user::ActiveModel = user.into();
        user.alerts_enabled = Set(enabled);
        Ok(user.update(&self.db).await?)
    }

    /// Telegram ids of every user who opted into alerts.
    pub async fn alert_recipients(&self) -> Result<Vec<i64>> {
        let users = entity::user::Entity
            ::find()
            .filter(entity::user::Column::AlertsEnabled.eq(true))
            .order_by_asc(entity::user::Column::TelegramId)
            .all(&self.db).await?;

        Ok(users.into_iter().map(|u| u.telegram_id).collect())
    }

    /// Delete a user and all rows owned by them. The schema carries no
    /// ON DELETE clauses, so every child table is swept explicitly inside one
    /// transaction.
    pub async fn delete(&self, telegram_id: i64) -> Result<()> {
        let txn = self.db.begin().await?;

        entity::watchlist_entry::Entity
            ::delete_many()
            .filter(entity::watchlist_entry::Column::UserId.eq(telegram_id))
            .exec(&txn).await?;
        entity::analysis_record::Entity
            ::delete_many()
            .filter(entity::analysis_record::Column::UserId.eq(telegram_id))
            .exec(&txn).await?;
        entity::alert_log::Entity
            ::delete_many()
            .filter(entity::alert_log::Column::UserId.eq(telegram_id))
            .exec(&txn).await?;
        entity::portfolio_position::Entity
            ::delete_many()
            .filter(entity::portfolio_position::Column::UserId.eq(telegram_id))
            .exec(&txn).await?;
        entity::trade_journal_entry::Entity
            ::delete_many()
            .filter(entity::trade_journal_entry::Column::UserId.eq(telegram_id))
            .exec(&txn).await?;
        entity::event_notification::Entity
            ::delete_many()
            .filter(entity::event_notification::Column::UserId.eq(telegram_id))
            .exec(&txn).await?;
        entity::alert_preference::Entity
            ::delete_many()
            .filter(entity::alert_preference::Column::UserId.eq(telegram_id))
            .exec(&txn).await?;

        let deleted = entity::user::Entity
            ::delete_many()
            .filter(entity::user::Column::TelegramId.eq(telegram_id))
            .exec(&txn).await?;

        if deleted.rows_affected == 0 {
            txn.rollback().await?;
            return Err(AppError::NotFound("User".to_string()));
        }

        txn.commit().await?;
        Ok(())
    }
}
