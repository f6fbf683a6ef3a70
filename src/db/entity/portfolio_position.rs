use sea_orm::entity::prelude::*;
use serde::{ Deserialize, Serialize };

/// A user's current holding in an asset. (user_id, asset) is unique.
/// `current_price` and the P&L columns are overwritten by the caller, never
/// derived by the store.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i64,
    pub asset: String,
    pub asset_type: Option<String>,
    pub quantity: f64,
    pub entry_price: f64,
    pub current_price: Option<f64>,
    pub profit_loss: Option<f64>,
    pub profit_loss_pct: Option<f64>,
    pub date_added: DateTimeUtc,
    pub last_updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
