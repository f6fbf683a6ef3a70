use sea_orm::entity::prelude::*;
use serde::{ Deserialize, Serialize };

/// Per-user alert configuration. At most one row per user; the primary key is
/// the user's telegram_id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "alert_preferences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    pub launch_alerts_enabled: bool,
    pub alert_frequency: String, // "standard" by default
    pub min_risk_score: i32,
    pub last_alert_sent: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
