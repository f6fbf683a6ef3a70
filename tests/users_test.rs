mod common;

use launchbot::db::{
    AlertLogRepository,
    AlertPreferenceRepository,
    AnalysisRepository,
    TradeJournalRepository,
    UserRepository,
    WatchlistRepository,
};
use launchbot::{ AppError, TradeType };

#[tokio::test]
async fn user_flags_are_mutable() {
    let db = common::setup().await;
    let users = UserRepository::new(db);

    users.create(100, Some("alice".to_string())).await.unwrap();

    let user = users.set_alerts_enabled(100, true).await.unwrap();
    assert!(user.alerts_enabled);

    let user = users.set_language(100, "de").await.unwrap();
    assert_eq!(user.language, "de");

    let user = users.set_status(100, "paused").await.unwrap();
    assert_eq!(user.status, "paused");

    // telegram_id is immutable; re-read confirms identity
    let user = users.find_by_telegram_id(100).await.unwrap();
    assert_eq!(user.telegram_id, 100);
    assert_eq!(user.language, "de");
}

#[tokio::test]
async fn alert_recipients_lists_opted_in_users() {
    let db = common::setup().await;
    let users = UserRepository::new(db);

    users.create(100, None).await.unwrap();
    users.create(200, None).await.unwrap();
    users.create(300, None).await.unwrap();

    users.set_alerts_enabled(100, true).await.unwrap();
    users.set_alerts_enabled(300, true).await.unwrap();

    assert_eq!(users.alert_recipients().await.unwrap(), vec![100, 300]);
}

#[tokio::test]
async fn analysis_history_is_appended_and_ordered() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let analyses = AnalysisRepository::new(db);

    users.create(100, None).await.unwrap();

    for (ticker, score) in [("BTC", 20), ("ETH", 45), ("DOGE", 90)] {
        analyses
            .record(100, ticker, Some("crypto".to_string()), score, None, None)
            .await
            .unwrap();
    }

    let history = analyses.history(100).await.unwrap();
    assert_eq!(history.len(), 3);
    // Creation order for audit reads
    assert_eq!(history[0].ticker, "BTC");
    assert_eq!(history[2].ticker, "DOGE");

    let recent = analyses.recent(100, 2).await.unwrap();
    assert_eq!(recent.len(), 2);
}

#[tokio::test]
async fn analysis_risk_score_is_validated() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let analyses = AnalysisRepository::new(db);

    users.create(100, None).await.unwrap();

    let err = analyses.record(100, "BTC", None, 101, None, None).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = analyses.record(100, "BTC", None, -1, None, None).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn analysis_payload_is_stored_opaque() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let analyses = AnalysisRepository::new(db);

    users.create(100, None).await.unwrap();

    let payload = r#"{"final_score":72.5,"summary":"high volatility"}"#;
    let record = analyses
        .record(
            100,
            "DOGE",
            Some("crypto".to_string()),
            72,
            Some("High Risk".to_string()),
            Some(payload.to_string())
        )
        .await
        .unwrap();

    assert_eq!(record.analysis_data.as_deref(), Some(payload));
}

#[tokio::test]
async fn alert_log_permits_duplicates() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let log = AlertLogRepository::new(db);

    users.create(100, None).await.unwrap();

    log.log(100, "BTC", "launch", "Halving in 3 days").await.unwrap();
    log.log(100, "BTC", "launch", "Halving in 3 days").await.unwrap();

    assert_eq!(log.history(100).await.unwrap().len(), 2);
}

#[tokio::test]
async fn preference_updates_apply_selectively() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let prefs = AlertPreferenceRepository::new(db);

    users.create(100, None).await.unwrap();
    prefs.create(100).await.unwrap();

    let updated = prefs.update(100, Some(false), None, Some(85)).await.unwrap();
    assert!(!updated.launch_alerts_enabled);
    assert_eq!(updated.alert_frequency, "standard");
    assert_eq!(updated.min_risk_score, 85);

    let err = prefs.update(100, None, None, Some(150)).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let stamped = prefs.touch_last_alert_sent(100).await.unwrap();
    assert!(stamped.last_alert_sent.is_some());
}

#[tokio::test]
async fn deleting_a_user_sweeps_owned_rows() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let watchlist = WatchlistRepository::new(db.clone());
    let analyses = AnalysisRepository::new(db.clone());
    let journal = TradeJournalRepository::new(db.clone());
    let prefs = AlertPreferenceRepository::new(db);

    users.create(100, None).await.unwrap();
    users.create(200, None).await.unwrap();

    watchlist.add(100, "BTC", "crypto", false, None, None).await.unwrap();
    watchlist.add(200, "BTC", "crypto", false, None, None).await.unwrap();
    analyses.record(100, "BTC", None, 50, None, None).await.unwrap();
    journal
        .record(100, "BTC", None, TradeType::Buy, 1.0, 50_000.0, None)
        .await
        .unwrap();
    prefs.create(100).await.unwrap();

    users.delete(100).await.unwrap();

    let err = users.find_by_telegram_id(100).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(watchlist.find_by_user(100).await.unwrap().is_empty());
    assert!(analyses.history(100).await.unwrap().is_empty());
    assert!(journal.history(100).await.unwrap().is_empty());
    assert!(matches!(prefs.find(100).await.unwrap_err(), AppError::NotFound(_)));

    // Other users are untouched
    assert_eq!(watchlist.find_by_user(200).await.unwrap().len(), 1);
}

#[tokio::test]
async fn watchlist_notes_are_mutable() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let watchlist = WatchlistRepository::new(db);

    users.create(100, None).await.unwrap();
    watchlist
        .add(100, "BTC", "crypto", false, Some(50_000.0), None)
        .await
        .unwrap();

    let entry = watchlist
        .update_notes(100, "BTC", Some("long-term hold".to_string()))
        .await
        .unwrap();
    assert_eq!(entry.notes.as_deref(), Some("long-term hold"));
    assert_eq!(entry.added_price, Some(50_000.0));

    let err = watchlist.update_notes(100, "XRP", None).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn watchlist_notes_survive_the_insert() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let watchlist = WatchlistRepository::new(db);

    users.create(100, None).await.unwrap();

    let entry = watchlist
        .add(100, "PEPE", "crypto", true, Some(0.000012), Some("degen bet".to_string()))
        .await
        .unwrap();
    assert_eq!(entry.notes.as_deref(), Some("degen bet"));

    let stored = watchlist.find_by_user_and_ticker(100, "PEPE").await.unwrap().unwrap();
    assert_eq!(stored.notes.as_deref(), Some("degen bet"));
    assert!(stored.is_meme_coin);
}
