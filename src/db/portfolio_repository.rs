use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::db::entity::portfolio_position;
use crate::error::{ AppError, Result };

pub struct PortfolioRepository {
    db: DatabaseConnection,
}

fn validate_holding(quantity: f64, entry_price: f64) -> Result<()> {
    if quantity <= 0.0 {
        return Err(AppError::Validation("Quantity must be positive".to_string()));
    }
    if entry_price < 0.0 {
        return Err(AppError::Validation("Entry price must not be negative".to_string()));
    }
    Ok(())
}

impl PortfolioRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Open a position. A second insert for the same (user, asset) fails with
    /// `ConstraintViolation`.
    pub async fn create(
        &self,
        user_id: i64,
        asset: &str,
        asset_type: Option<String>,
        quantity: f64,
        entry_price: f64,
        current_price: Option<f64>
    ) -> Result<portfolio_position::Model> {
        validate_holding(quantity, entry_price)?;

        let now = chrono::Utc::now();

        let position = portfolio_position::ActiveModel {
            user_id: Set(user_id),
            asset: Set(asset.trim().to_uppercase()),
            asset_type: Set(asset_type),
            quantity: Set(quantity),
            entry_price: Set(entry_price),
            current_price: Set(current_price),
            profit_loss: Set(None),
            profit_loss_pct: Set(None),
            date_added: Set(now),
            last_updated: Set(now),
            ..Default::default()
        };

        let position = position.insert(&self.db).await?;
        Ok(position)
    }

    pub async fn find_by_user_and_asset(
        &self,
        user_id: i64,
        asset: &str
    ) -> Result<Option<portfolio_position::Model>> {
        let position = portfolio_position::Entity
            ::find()
            .filter(portfolio_position::Column::UserId.eq(user_id))
            .filter(portfolio_position::Column::Asset.eq(asset.trim().to_uppercase()))
            .one(&self.db).await?;

        Ok(position)
    }

    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<portfolio_position::Model>> {
        let positions = portfolio_position::Entity
            ::find()
            .filter(portfolio_position::Column::UserId.eq(user_id))
            .order_by_desc(portfolio_position::Column::DateAdded)
            .all(&self.db).await?;

        Ok(positions)
    }

    /// Rewrite the holding itself (quantity and cost basis), e.g. after a
    /// trade was applied against it.
    pub async fn update_position(
        &self,
        user_id: i64,
        asset: &str,
        quantity: f64,
        entry_price: f64,
        current_price: Option<f64>
    ) -> Result<portfolio_position::Model> {
        validate_holding(quantity, entry_price)?;

        let position = self
            .find_by_user_and_asset(user_id, asset).await?
            .ok_or_else(|| AppError::NotFound("Portfolio position".to_string()))?;

        let mut position: portfolio_position::ActiveModel = position.into();
        position.quantity = Set(quantity);
        position.entry_price = Set(entry_price);
        position.current_price = Set(current_price);
        position.last_updated = Set(chrono::Utc::now());
        Ok(position.update(&self.db).await?)
    }

    /// Overwrite the externally recomputed price and P&L columns.
    pub async fn update_price(
        &self,
        user_id: i64,
        asset: &str,
        current_price: f64,
        profit_loss: f64,
        profit_loss_pct: f64
    ) -> Result<portfolio_position::Model> {
        let position = self
            .find_by_user_and_asset(user_id, asset).await?
            .ok_or_else(|| AppError::NotFound("Portfolio position".to_string()))?;

        let mut position: portfolio_position::ActiveModel = position.into();
        position.current_price = Set(Some(current_price));
        position.profit_loss = Set(Some(profit_loss));
        position.profit_loss_pct = Set(Some(profit_loss_pct));
        position.last_updated = Set(chrono::Utc::now());
        Ok(position.update(&self.db).await?)
    }

    pub async fn remove(&self, user_id: i64, asset: &str) -> Result<()> {
        let deleted = portfolio_position::Entity
            ::delete_many()
            .filter(portfolio_position::Column::UserId.eq(user_id))
            .filter(portfolio_position::Column::Asset.eq(asset.trim().to_uppercase()))
            .exec(&self.db).await?;

        if deleted.rows_affected == 0 {
            return Err(AppError::NotFound("Portfolio position".to_string()));
        }

        Ok(())
    }
}
