mod common;

use launchbot::db::{ AlertPreferenceRepository, UserRepository, WatchlistRepository };
use launchbot::AppError;
use migration::{ Migrator, MigratorTrait };

#[tokio::test]
async fn duplicate_telegram_id_is_rejected() {
    let db = common::setup().await;
    let users = UserRepository::new(db);

    users.create(100, Some("alice".to_string())).await.unwrap();

    let err = users.create(100, Some("impostor".to_string())).await.unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)), "got {:?}", err);
}

#[tokio::test]
async fn get_or_create_returns_existing_user() {
    let db = common::setup().await;
    let users = UserRepository::new(db);

    let first = users.get_or_create(100, Some("alice".to_string())).await.unwrap();
    let second = users.get_or_create(100, Some("alice2".to_string())).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.username.as_deref(), Some("alice"));
    assert_eq!(second.status, "active");
    assert_eq!(second.language, "en");
    assert!(!second.alerts_enabled);
}

#[tokio::test]
async fn watchlist_pair_is_unique_per_user() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let watchlist = WatchlistRepository::new(db);

    users.create(100, None).await.unwrap();
    users.create(200, None).await.unwrap();

    watchlist.add(100, "BTC", "crypto", false, None, None).await.unwrap();

    let err = watchlist.add(100, "BTC", "crypto", false, None, None).await.unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)), "got {:?}", err);

    // Same user, different ticker
    watchlist.add(100, "ETH", "crypto", false, None, None).await.unwrap();
    // Same ticker, different user
    watchlist.add(200, "BTC", "crypto", false, None, None).await.unwrap();

    assert_eq!(watchlist.find_by_user(100).await.unwrap().len(), 2);
}

#[tokio::test]
async fn tickers_are_normalized_before_comparison() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let watchlist = WatchlistRepository::new(db);

    users.create(100, None).await.unwrap();
    watchlist.add(100, " btc ", "crypto", false, None, None).await.unwrap();

    let err = watchlist.add(100, "BTC", "crypto", false, None, None).await.unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    watchlist.remove(100, "btc").await.unwrap();
    assert!(watchlist.find_by_user(100).await.unwrap().is_empty());
}

#[tokio::test]
async fn orphan_child_row_is_rejected() {
    let db = common::setup().await;
    let watchlist = WatchlistRepository::new(db);

    // No user with telegram_id 999 exists
    let err = watchlist.add(999, "BTC", "crypto", false, None, None).await.unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)), "got {:?}", err);
}

#[tokio::test]
async fn alert_preferences_are_singleton_per_user() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let prefs = AlertPreferenceRepository::new(db);

    users.create(100, None).await.unwrap();

    let created = prefs.create(100).await.unwrap();
    assert!(created.launch_alerts_enabled);
    assert_eq!(created.alert_frequency, "standard");
    assert_eq!(created.min_risk_score, 70);
    assert!(created.last_alert_sent.is_none());

    let err = prefs.create(100).await.unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)), "got {:?}", err);
}

#[tokio::test]
async fn preferences_default_without_materializing_a_row() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let prefs = AlertPreferenceRepository::new(db);

    users.create(100, None).await.unwrap();

    let defaults = prefs.find_or_default(100).await.unwrap();
    assert_eq!(defaults.min_risk_score, 70);

    // Still no stored row
    let err = prefs.find(100).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn reapplying_migrations_is_a_no_op() {
    let db = common::setup().await;

    // Every table and index is create-if-absent
    Migrator::up(&db, None).await.unwrap();

    let users = UserRepository::new(db);
    users.create(100, None).await.unwrap();
}

#[tokio::test]
async fn deleting_a_missing_user_reports_not_found() {
    let db = common::setup().await;
    let users = UserRepository::new(db);

    let err = users.delete(42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
