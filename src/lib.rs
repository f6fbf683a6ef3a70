pub mod config;
pub mod enums;
pub mod error;
pub mod db;
pub mod services;

pub use config::Config;
pub use enums::TradeType;
pub use error::{ AppError, Result };
