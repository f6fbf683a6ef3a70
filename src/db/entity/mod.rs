pub mod user;
pub mod watchlist_entry;
pub mod analysis_record;
pub mod alert_log;
pub mod portfolio_position;
pub mod trade_journal_entry;
pub mod launch_event;
pub mod alert_preference;
pub mod event_notification;

pub use user::Entity as User;
pub use watchlist_entry::Entity as WatchlistEntry;
pub use analysis_record::Entity as AnalysisRecord;
pub use alert_log::Entity as AlertLog;
pub use portfolio_position::Entity as PortfolioPosition;
pub use trade_journal_entry::Entity as TradeJournalEntry;
pub use launch_event::Entity as LaunchEvent;
pub use alert_preference::Entity as AlertPreference;
pub use event_notification::Entity as EventNotification;
