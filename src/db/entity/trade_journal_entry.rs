use sea_orm::entity::prelude::*;
use serde::{ Deserialize, Serialize };

/// A historical buy/sell event. Append-only ledger.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trade_journal")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i64,
    pub asset: String,
    pub asset_type: Option<String>,
    pub trade_type: String, // "buy" or "sell"
    pub quantity: f64,
    pub price: f64,
    pub total_value: f64,
    pub executed_at: DateTimeUtc,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
