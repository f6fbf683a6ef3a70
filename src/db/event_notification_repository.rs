use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::db::entity::event_notification;
use crate::error::Result;

/// Delivery ledger linking users and launch events. Append-only; the schema
/// permits duplicate (user, event) rows, so dedup is the caller's call via
/// `was_notified`.
pub struct EventNotificationRepository {
    db: DatabaseConnection,
}

impl EventNotificationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record(&self, user_id: i64, event_id: i32) -> Result<event_notification::Model> {
        let notification = event_notification::ActiveModel {
            user_id: Set(user_id),
            event_id: Set(event_id),
            sent_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let notification = notification.insert(&self.db).await?;
        Ok(notification)
    }

    pub async fn for_user(&self, user_id: i64) -> Result<Vec<event_notification::Model>> {
        let notifications = event_notification::Entity
            ::find()
            .filter(event_notification::Column::UserId.eq(user_id))
            .order_by_asc(event_notification::Column::Id)
            .all(&self.db).await?;

        Ok(notifications)
    }

    pub async fn was_notified(&self, user_id: i64, event_id: i32) -> Result<bool> {
        let count = event_notification::Entity
            ::find()
            .filter(event_notification::Column::UserId.eq(user_id))
            .filter(event_notification::Column::EventId.eq(event_id))
            .count(&self.db).await?;

        Ok(count > 0)
    }
}
