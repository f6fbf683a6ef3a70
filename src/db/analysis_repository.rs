use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::db::entity::analysis_record;
use crate::error::{ AppError, Result };

/// Append-only history of risk analyses. Rows are never updated or deleted.
pub struct AnalysisRepository {
    db: DatabaseConnection,
}

impl AnalysisRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record(
        &self,
        user_id: i64,
        ticker: &str,
        asset_type: Option<String>,
        risk_score: i32,
        risk_level: Option<String>,
        analysis_data: Option<String>
    ) -> Result<analysis_record::Model> {
        if !(0..=100).contains(&risk_score) {
            return Err(
                AppError::Validation(format!("Risk score out of range: {}", risk_score))
            );
        }

        let record = analysis_record::ActiveModel {
            user_id: Set(user_id),
            ticker: Set(ticker.trim().to_uppercase()),
            asset_type: Set(asset_type),
            risk_score: Set(risk_score),
            risk_level: Set(risk_level),
            analysis_data: Set(analysis_data),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let record = record.insert(&self.db).await?;
        Ok(record)
    }

    /// Latest analyses first, bounded.
    pub async fn recent(&self, user_id: i64, limit: u64) -> Result<Vec<analysis_record::Model>> {
        let records = analysis_record::Entity
            ::find()
            .filter(analysis_record::Column::UserId.eq(user_id))
            .order_by_desc(analysis_record::Column::CreatedAt)
            .limit(limit)
            .all(&self.db).await?;

        Ok(records)
    }

    /// Full history in creation order, for audit reads.
    pub async fn history(&self, user_id: i64) -> Result<Vec<analysis_record::Model>> {
        let records = analysis_record::Entity
            ::find()
            .filter(analysis_record::Column::UserId.eq(user_id))
            .order_by_asc(analysis_record::Column::Id)
            .all(&self.db).await?;

        Ok(records)
    }
}
