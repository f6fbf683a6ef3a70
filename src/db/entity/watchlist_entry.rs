use sea_orm::entity::prelude::*;
use serde::{ Deserialize, Serialize };

/// A ticker a user tracks. (user_id, ticker) is unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "watchlist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i64,
    pub ticker: String,
    pub asset_type: String,
    pub is_meme_coin: bool,
    pub added_price: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
