use sea_orm::entity::prelude::*;
use serde::{ Deserialize, Serialize };

/// A scheduled or detected market event for an asset.
/// (asset, event_date, event_type) is unique to block duplicate ingestion.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "launch_events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub asset: String,
    pub asset_type: String,
    pub event_type: String, // "listing", "upgrade", "halving", ...
    pub event_date: Date,
    pub description: Option<String>,
    pub source: Option<String>,
    pub risk_score: Option<f64>,
    pub risk_level: Option<String>,
    pub confidence: Option<f64>,
    pub notified: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
