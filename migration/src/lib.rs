pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users_table;
mod m20250102_000001_create_watchlist_table;
mod m20250103_000001_create_analysis_history_table;
mod m20250103_000002_create_alerts_log_table;
mod m20250104_000001_create_portfolio_table;
mod m20250104_000002_create_trade_journal_table;
mod m20250105_000001_create_launch_events_table;
mod m20250106_000001_create_alert_preferences_table;
mod m20250106_000002_create_event_notifications_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users_table::Migration),
            Box::new(m20250102_000001_create_watchlist_table::Migration),
            Box::new(m20250103_000001_create_analysis_history_table::Migration),
            Box::new(m20250103_000002_create_alerts_log_table::Migration),
            Box::new(m20250104_000001_create_portfolio_table::Migration),
            Box::new(m20250104_000002_create_trade_journal_table::Migration),
            Box::new(m20250105_000001_create_launch_events_table::Migration),
            Box::new(m20250106_000001_create_alert_preferences_table::Migration),
            Box::new(m20250106_000002_create_event_notifications_table::Migration)
        ]
    }
}
