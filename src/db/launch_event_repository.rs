use chrono::{ Duration, Utc };
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::db::entity::launch_event;
use crate::error::{ AppError, Result };

pub struct LaunchEventRepository {
    db: DatabaseConnection,
}

impl LaunchEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ingest an event. A duplicate (asset, event_date, event_type) triple
    /// fails with `ConstraintViolation`, which ingestion collaborators may
    /// treat as already-seen.
    pub async fn create(
        &self,
        asset: &str,
        asset_type: &str,
        event_type: &str,
        event_date: chrono::NaiveDate,
        description: Option<String>,
        source: Option<String>
    ) -> Result<launch_event::Model> {
        let event = launch_event::ActiveModel {
            asset: Set(asset.trim().to_uppercase()),
            asset_type: Set(asset_type.to_string()),
            event_type: Set(event_type.to_string()),
            event_date: Set(event_date),
            description: Set(description),
            source: Set(source),
            risk_score: Set(None),
            risk_level: Set(None),
            confidence: Set(None),
            notified: Set(false),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let event = event.insert(&self.db).await?;
        Ok(event)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<launch_event::Model> {
        launch_event::Entity
            ::find_by_id(id)
            .one(&self.db).await?
            .ok_or_else(|| AppError::NotFound("Launch event".to_string()))
    }

    /// Events dated within the next `window_days`, soonest first.
    pub async fn upcoming(&self, window_days: i64) -> Result<Vec<launch_event::Model>> {
        let today = Utc::now().date_naive();
        let horizon = today + Duration::days(window_days);

        let events = launch_event::Entity
            ::find()
            .filter(launch_event::Column::EventDate.gte(today))
            .filter(launch_event::Column::EventDate.lte(horizon))
            .order_by_asc(launch_event::Column::EventDate)
            .all(&self.db).await?;

        Ok(events)
    }

    /// Events whose alert is due: dated exactly `days_before` days out and
    /// not yet notified.
    pub async fn due_for_alert(&self, days_before: i64) -> Result<Vec<launch_event::Model>> {
        let target = Utc::now().date_naive() + Duration::days(days_before);

        let events = launch_event::Entity
            ::find()
            .filter(launch_event::Column::EventDate.eq(target))
            .filter(launch_event::Column::Notified.eq(false))
            .order_by_asc(launch_event::Column::EventDate)
            .all(&self.db).await?;

        Ok(events)
    }

    /// The one-way notified transition. Idempotent: marking an already
    /// notified event is a no-op.
    pub async fn mark_notified(&self, id: i32) -> Result<launch_event::Model> {
        let event = self.find_by_id(id).await?;
        if event.notified {
            return Ok(event);
        }

        let mut event: launch_event::ActiveModel = event.into();
        event.notified = Set(true);
        Ok(event.update(&self.db).await?)
    }

    /// Attach analysis results computed by the analysis collaborator.
    pub async fn update_analysis(
        &self,
        id: i32,
        risk_score: f64,
        risk_level: &str,
        confidence: f64
    ) -> Result<launch_event::Model> {
        let event = self.find_by_id(id).await?;

        let mut event: launch_event::ActiveModel = event.into();
        event.risk_score = Set(Some(risk_score));
        event.risk_level = Set(Some(risk_level.to_string()));
        event.confidence = Set(Some(confidence));
        Ok(event.update(&self.db).await?)
    }
}
