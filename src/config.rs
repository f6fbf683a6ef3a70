use std::env;

/// Store configuration resolved from environment variables.
///
/// `DATABASE_URL` selects the engine: a `sqlite://` URL for the embedded
/// single-file engine, a `postgres://` URL for the client/server one. The
/// schema runs unmodified on both.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    /// How many days before an event its alert becomes due.
    pub alert_days_before: i64,
    /// Window, in days, for the upcoming-events listing.
    pub upcoming_window_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenv::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://launchbot.db?mode=rwc".to_string());

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()?;

        let alert_days_before = env::var("LAUNCH_ALERT_DAYS_BEFORE")
            .unwrap_or_else(|_| "3".to_string())
            .parse()?;

        let upcoming_window_days = env::var("LAUNCH_UPCOMING_WINDOW_DAYS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()?;

        if max_connections == 0 {
            return Err("DB_MAX_CONNECTIONS must be at least 1".into());
        }

        Ok(Config {
            database_url,
            max_connections,
            alert_days_before,
            upcoming_window_days,
        })
    }

    /// Whether the configured engine is the embedded one.
    pub fn is_sqlite(&self) -> bool {
        self.database_url.starts_with("sqlite:")
    }
}
