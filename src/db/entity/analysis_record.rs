use sea_orm::entity::prelude::*;
use serde::{ Deserialize, Serialize };

/// A point-in-time risk analysis result. Append-only; never updated.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "analysis_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i64,
    pub ticker: String,
    pub asset_type: Option<String>,
    pub risk_score: i32,
    pub risk_level: Option<String>,
    /// Opaque caller-encoded payload; the store never parses it.
    pub analysis_data: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
