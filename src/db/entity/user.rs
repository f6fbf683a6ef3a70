use sea_orm::entity::prelude::*;
use serde::{ Deserialize, Serialize };

/// A bot end-user. Child tables reference `telegram_id`, the externally
/// meaningful identity, not the surrogate `id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub telegram_id: i64,
    pub username: Option<String>,
    pub status: String, // "active" by default
    pub language: String,
    pub alerts_enabled: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
