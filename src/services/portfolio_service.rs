use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::Serialize;

use crate::db::entity::{ portfolio_position, trade_journal_entry };
use crate::enums::TradeType;
use crate::error::{ AppError, Result };

/// Applies trades to the journal and keeps the portfolio in sync: buys
/// average the cost basis over the combined quantity, sells reduce the
/// position and close it once depleted. Journal row and position change
/// commit together; a trade is never journaled without its portfolio effect.
pub struct PortfolioService {
    db: DatabaseConnection,
}

#[derive(Debug, Clone, Serialize)]
pub struct PnlSummary {
    pub total_investment: f64,
    pub current_value: f64,
    pub profit_loss: f64,
    pub profit_loss_pct: f64,
}

impl PortfolioService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record_trade(
        &self,
        user_id: i64,
        asset: &str,
        asset_type: Option<String>,
        trade_type: TradeType,
        quantity: f64,
        price: f64,
        notes: Option<String>
    ) -> Result<trade_journal_entry::Model> {
        if quantity <= 0.0 {
            return Err(AppError::Validation("Quantity must be positive".to_string()));
        }
        if price < 0.0 {
            return Err(AppError::Validation("Price must not be negative".to_string()));
        }

        let asset = asset.trim().to_uppercase();
        let now = chrono::Utc::now();

        let txn = self.db.begin().await?;

        let entry = (trade_journal_entry::ActiveModel {
            user_id: Set(user_id),
            asset: Set(asset.clone()),
            asset_type: Set(asset_type.clone()),
            trade_type: Set(trade_type.as_str().to_string()),
            quantity: Set(quantity),
            price: Set(price),
            total_value: Set(quantity * price),
            executed_at: Set(now),
            notes: Set(notes),
            ..Default::default()
        }).insert(&txn).await?;

        let existing = portfolio_position::Entity
            ::find()
            .filter(portfolio_position::Column::UserId.eq(user_id))
            .filter(portfolio_position::Column::Asset.eq(asset.clone()))
            .one(&txn).await?;

        match trade_type {
            TradeType::Buy => {
                match existing {
                    Some(position) => {
                        let new_quantity = position.quantity + quantity;
                        let new_entry_price = averaged_entry_price(
                            position.quantity,
                            position.entry_price,
                            quantity,
                            price
                        );

                        let mut position: portfolio_position::ActiveModel = position.into();
                        position.quantity = Set(new_quantity);
                        position.entry_price = Set(new_entry_price);
                        position.current_price = Set(Some(price));
                        position.last_updated = Set(now);
                        position.update(&txn).await?;
                    }
                    None => {
                        (portfolio_position::ActiveModel {
                            user_id: Set(user_id),
                            asset: Set(asset),
                            asset_type: Set(asset_type),
                            quantity: Set(quantity),
                            entry_price: Set(price),
                            current_price: Set(Some(price)),
                            profit_loss: Set(None),
                            profit_loss_pct: Set(None),
                            date_added: Set(now),
                            last_updated: Set(now),
                            ..Default::default()
                        }).insert(&txn).await?;
                    }
                }
            }
            TradeType::Sell => {
                // Selling with no open position only journals the trade
                if let Some(position) = existing {
                    let new_quantity = position.quantity - quantity;
                    if new_quantity <= 0.0 {
                        let position: portfolio_position::ActiveModel = position.into();
                        position.delete(&txn).await?;
                    } else {
                        let mut position: portfolio_position::ActiveModel = position.into();
                        position.quantity = Set(new_quantity);
                        position.current_price = Set(Some(price));
                        position.last_updated = Set(now);
                        position.update(&txn).await?;
                    }
                }
            }
        }

        txn.commit().await?;
        Ok(entry)
    }

    /// Push a fresh market price into a position and overwrite its P&L.
    pub async fn refresh_price(
        &self,
        user_id: i64,
        asset: &str,
        current_price: f64
    ) -> Result<()> {
        let position = portfolio_position::Entity
            ::find()
            .filter(portfolio_position::Column::UserId.eq(user_id))
            .filter(portfolio_position::Column::Asset.eq(asset.trim().to_uppercase()))
            .one(&self.db).await?
            .ok_or_else(|| AppError::NotFound("Portfolio position".to_string()))?;

        let (profit_loss, profit_loss_pct) = profit_loss(
            position.entry_price,
            current_price,
            position.quantity
        );

        let mut position: portfolio_position::ActiveModel = position.into();
        position.current_price = Set(Some(current_price));
        position.profit_loss = Set(Some(profit_loss));
        position.profit_loss_pct = Set(Some(profit_loss_pct));
        position.last_updated = Set(chrono::Utc::now());
        position.update(&self.db).await?;

        Ok(())
    }

    /// Aggregate P&L across every open position of a user. Positions without
    /// a known current price count as zero current value.
    pub async fn pnl_summary(&self, user_id: i64) -> Result<PnlSummary> {
        let positions = portfolio_position::Entity
            ::find()
            .filter(portfolio_position::Column::UserId.eq(user_id))
            .all(&self.db).await?;

        let total_investment: f64 = positions
            .iter()
            .map(|p| p.entry_price * p.quantity)
            .sum();
        let current_value: f64 = positions
            .iter()
            .map(|p| p.current_price.unwrap_or(0.0) * p.quantity)
            .sum();

        let profit_loss = current_value - total_investment;
        let profit_loss_pct = if total_investment > 0.0 {
            (profit_loss / total_investment) * 100.0
        } else {
            0.0
        };

        Ok(PnlSummary {
            total_investment,
            current_value,
            profit_loss,
            profit_loss_pct,
        })
    }
}

/// Cost basis after buying `quantity` at `price` on top of an existing
/// holding.
fn averaged_entry_price(old_quantity: f64, old_price: f64, quantity: f64, price: f64) -> f64 {
    ((old_quantity * old_price) + (quantity * price)) / (old_quantity + quantity)
}

/// Absolute and percentage P&L for a position. Percentage is zero when the
/// entry price is zero.
fn profit_loss(entry_price: f64, current_price: f64, quantity: f64) -> (f64, f64) {
    let absolute = (current_price - entry_price) * quantity;
    let pct = if entry_price > 0.0 {
        ((current_price - entry_price) / entry_price) * 100.0
    } else {
        0.0
    };
    (absolute, pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_averaged_entry_price() {
        // 1 BTC @ 40k + 1 BTC @ 60k = 2 BTC @ 50k
        let avg = averaged_entry_price(1.0, 40_000.0, 1.0, 60_000.0);
        assert_eq!(avg, 50_000.0);

        // Weighted: 3 @ 10 + 1 @ 30 = 4 @ 15
        let avg = averaged_entry_price(3.0, 10.0, 1.0, 30.0);
        assert_eq!(avg, 15.0);
    }

    #[test]
    fn test_profit_loss() {
        let (pl, pct) = profit_loss(50_000.0, 55_000.0, 2.0);
        assert_eq!(pl, 10_000.0);
        assert!((pct - 10.0).abs() < 1e-9);

        let (pl, pct) = profit_loss(100.0, 80.0, 1.0);
        assert_eq!(pl, -20.0);
        assert!((pct + 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_profit_loss_zero_entry() {
        let (pl, pct) = profit_loss(0.0, 10.0, 5.0);
        assert_eq!(pl, 50.0);
        assert_eq!(pct, 0.0);
    }
}
