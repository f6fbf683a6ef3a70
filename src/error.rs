use sea_orm::{ DbErr, SqlErr };
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Constraint violation: {0}")] ConstraintViolation(String),

    #[error("{0} not found")] NotFound(String),

    #[error("Invalid input: {0}")] Validation(String),

    #[error("Database unreachable: {0}")] Connectivity(String),

    #[error("Database error: {0}")] Database(DbErr),

    #[error("Configuration error: {0}")] Config(String),
}

impl AppError {
    /// True when a retry has a chance of succeeding (engine was unreachable).
    pub fn is_transient(&self) -> bool {
        matches!(self, AppError::Connectivity(_))
    }
}

// Unique and foreign-key breaches must surface as typed failures, never as
// raw driver strings.
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        if let Some(sql_err) = err.sql_err() {
            return match sql_err {
                SqlErr::UniqueConstraintViolation(msg) => AppError::ConstraintViolation(msg),
                SqlErr::ForeignKeyConstraintViolation(msg) => AppError::ConstraintViolation(msg),
                _ => AppError::Database(err),
            };
        }

        match err {
            DbErr::Conn(e) => AppError::Connectivity(e.to_string()),
            DbErr::ConnectionAcquire(e) => AppError::Connectivity(e.to_string()),
            DbErr::RecordNotFound(what) => AppError::NotFound(what),
            other => AppError::Database(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
