use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::db::entity::alert_log;
use crate::error::Result;

/// Append-only log of alerts actually sent to users.
pub struct AlertLogRepository {
    db: DatabaseConnection,
}

impl AlertLogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn log(
        &self,
        user_id: i64,
        ticker: &str,
        alert_type: &str,
        message: &str
    ) -> Result<alert_log::Model> {
        let entry = alert_log::ActiveModel {
            user_id: Set(user_id),
            ticker: Set(ticker.trim().to_uppercase()),
            alert_type: Set(alert_type.to_string()),
            message: Set(message.to_string()),
            sent_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let entry = entry.insert(&self.db).await?;
        Ok(entry)
    }

    pub async fn recent(&self, user_id: i64, limit: u64) -> Result<Vec<alert_log::Model>> {
        let entries = alert_log::Entity
            ::find()
            .filter(alert_log::Column::UserId.eq(user_id))
            .order_by_desc(alert_log::Column::SentAt)
            .limit(limit)
            .all(&self.db).await?;

        Ok(entries)
    }

    /// Full log in creation order, for audit reads.
    pub async fn history(&self, user_id: i64) -> Result<Vec<alert_log::Model>> {
        let entries = alert_log::Entity
            ::find()
            .filter(alert_log::Column::UserId.eq(user_id))
            .order_by_asc(alert_log::Column::Id)
            .all(&self.db).await?;

        Ok(entries)
    }
}
