use sea_orm::{ ActiveModelTrait, DatabaseConnection, EntityTrait, Set };

use crate::db::entity::alert_preference;
use crate::error::{ AppError, Result };

/// Singleton settings row per user, keyed by telegram_id. A second `create`
/// for the same user fails with `ConstraintViolation`.
pub struct AlertPreferenceRepository {
    db: DatabaseConnection,
}

impl AlertPreferenceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i64) -> Result<alert_preference::Model> {
        let prefs = alert_preference::ActiveModel {
            user_id: Set(user_id),
            launch_alerts_enabled: Set(true),
            alert_frequency: Set("standard".to_string()),
            min_risk_score: Set(70),
            last_alert_sent: Set(None),
        };

        let prefs = prefs.insert(&self.db).await?;
        Ok(prefs)
    }

    pub async fn find(&self, user_id: i64) -> Result<alert_preference::Model> {
        alert_preference::Entity
            ::find_by_id(user_id)
            .one(&self.db).await?
            .ok_or_else(|| AppError::NotFound("Alert preferences".to_string()))
    }

    /// Read settings without materializing a row: users who never touched
    /// their preferences get the defaults.
    pub async fn find_or_default(&self, user_id: i64) -> Result<alert_preference::Model> {
        let prefs = alert_preference::Entity::find_by_id(user_id).one(&self.db).await?;

        Ok(prefs.unwrap_or(alert_preference::Model {
            user_id,
            launch_alerts_enabled: true,
            alert_frequency: "standard".to_string(),
            min_risk_score: 70,
            last_alert_sent: None,
        }))
    }

    pub async fn update(
        &self,
        user_id: i64,
        launch_alerts_enabled: Option<bool>,
        alert_frequency: Option<String>,
        min_risk_score: Option<i32>
    ) -> Result<alert_preference::Model> {
        if let Some(score) = min_risk_score {
            if !(0..=100).contains(&score) {
                return Err(
                    AppError::Validation(format!("Minimum risk score out of range: {}", score))
                );
            }
        }

        let prefs = self.find(user_id).await?;

        let mut prefs: alert_preference::ActiveModel = prefs.into();
        if let Some(enabled) = launch_alerts_enabled {
            prefs.launch_alerts_enabled = Set(enabled);
        }
        if let Some(frequency) = alert_frequency {
            prefs.alert_frequency = Set(frequency);
        }
        if let Some(score) = min_risk_score {
            prefs.min_risk_score = Set(score);
        }
        Ok(prefs.update(&self.db).await?)
    }

    /// Stamp the moment an alert went out.
    pub async fn touch_last_alert_sent(&self, user_id: i64) -> Result<alert_preference::Model> {
        let prefs = self.find(user_id).await?;

        let mut prefs: alert_preference::ActiveModel = prefs.into();
        prefs.last_alert_sent = Set(Some(chrono::Utc::now()));
        Ok(prefs.update(&self.db).await?)
    }
}
