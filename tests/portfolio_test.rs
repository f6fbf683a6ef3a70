mod common;

use launchbot::db::{ PortfolioRepository, TradeJournalRepository, UserRepository };
use launchbot::services::PortfolioService;
use launchbot::{ AppError, TradeType };
use sea_orm::ConnectionTrait;

#[tokio::test]
async fn one_open_position_per_asset_per_user() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let positions = PortfolioRepository::new(db);

    users.create(100, None).await.unwrap();

    positions.create(100, "BTC", None, 1.0, 50_000.0, None).await.unwrap();

    let err = positions.create(100, "BTC", None, 2.0, 48_000.0, None).await.unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)), "got {:?}", err);

    // Price update is visible on subsequent read
    positions.update_price(100, "BTC", 55_000.0, 5_000.0, 10.0).await.unwrap();

    let position = positions.find_by_user_and_asset(100, "BTC").await.unwrap().unwrap();
    assert_eq!(position.current_price, Some(55_000.0));
    assert_eq!(position.profit_loss, Some(5_000.0));
    assert_eq!(position.profit_loss_pct, Some(10.0));
}

#[tokio::test]
async fn positions_are_validated_at_the_repository() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let positions = PortfolioRepository::new(db);

    users.create(100, None).await.unwrap();

    let err = positions.create(100, "BTC", None, 0.0, 50_000.0, None).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);

    let err = positions.create(100, "BTC", None, 1.0, -1.0, None).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);

    positions.create(100, "BTC", None, 1.0, 50_000.0, None).await.unwrap();

    let err = positions
        .update_position(100, "BTC", -2.0, 50_000.0, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);

    let err = positions
        .update_position(100, "BTC", 1.0, -50_000.0, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);
}

#[tokio::test]
async fn buys_average_the_cost_basis() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let journal = TradeJournalRepository::new(db.clone());
    let positions = PortfolioRepository::new(db.clone());
    let service = PortfolioService::new(db);

    users.create(100, None).await.unwrap();

    service
        .record_trade(100, "BTC", None, TradeType::Buy, 1.0, 40_000.0, None)
        .await
        .unwrap();
    service
        .record_trade(100, "BTC", None, TradeType::Buy, 1.0, 60_000.0, None)
        .await
        .unwrap();

    let position = positions.find_by_user_and_asset(100, "BTC").await.unwrap().unwrap();
    assert_eq!(position.quantity, 2.0);
    assert_eq!(position.entry_price, 50_000.0);
    assert_eq!(position.current_price, Some(60_000.0));

    assert_eq!(journal.history(100).await.unwrap().len(), 2);
}

#[tokio::test]
async fn selling_everything_closes_the_position() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let journal = TradeJournalRepository::new(db.clone());
    let positions = PortfolioRepository::new(db.clone());
    let service = PortfolioService::new(db);

    users.create(100, None).await.unwrap();

    service
        .record_trade(100, "ETH", None, TradeType::Buy, 10.0, 2_000.0, None)
        .await
        .unwrap();
    service
        .record_trade(100, "ETH", None, TradeType::Sell, 4.0, 2_500.0, None)
        .await
        .unwrap();

    let position = positions.find_by_user_and_asset(100, "ETH").await.unwrap().unwrap();
    assert_eq!(position.quantity, 6.0);
    // Cost basis is untouched by sells
    assert_eq!(position.entry_price, 2_000.0);

    service
        .record_trade(100, "ETH", None, TradeType::Sell, 6.0, 2_600.0, None)
        .await
        .unwrap();
    assert!(positions.find_by_user_and_asset(100, "ETH").await.unwrap().is_none());

    // The ledger keeps every trade regardless
    assert_eq!(journal.history(100).await.unwrap().len(), 3);
}

#[tokio::test]
async fn trade_validation_rejects_bad_quantities() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let service = PortfolioService::new(db);

    users.create(100, None).await.unwrap();

    let err = service
        .record_trade(100, "BTC", None, TradeType::Buy, 0.0, 50_000.0, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = service
        .record_trade(100, "BTC", None, TradeType::Buy, 1.0, -1.0, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn failed_position_write_rolls_back_the_journal() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let journal = TradeJournalRepository::new(db.clone());
    let service = PortfolioService::new(db.clone());

    users.create(100, None).await.unwrap();

    // Make the position side of the trade fail after the journal insert
    db.execute_unprepared("DROP TABLE portfolio").await.unwrap();

    let err = service
        .record_trade(100, "BTC", None, TradeType::Buy, 1.0, 50_000.0, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Database(_)), "got {:?}", err);

    // Journal row and position change commit together: no orphaned trade
    assert!(journal.history(100).await.unwrap().is_empty());
}

#[tokio::test]
async fn refresh_price_recomputes_pnl() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let positions = PortfolioRepository::new(db.clone());
    let service = PortfolioService::new(db);

    users.create(100, None).await.unwrap();
    service
        .record_trade(100, "BTC", None, TradeType::Buy, 2.0, 50_000.0, None)
        .await
        .unwrap();

    service.refresh_price(100, "BTC", 55_000.0).await.unwrap();

    let position = positions.find_by_user_and_asset(100, "BTC").await.unwrap().unwrap();
    assert_eq!(position.profit_loss, Some(10_000.0));
    assert!((position.profit_loss_pct.unwrap() - 10.0).abs() < 1e-9);

    let summary = service.pnl_summary(100).await.unwrap();
    assert_eq!(summary.total_investment, 100_000.0);
    assert_eq!(summary.current_value, 110_000.0);
    assert_eq!(summary.profit_loss, 10_000.0);
    assert!((summary.profit_loss_pct - 10.0).abs() < 1e-9);

    let err = service.refresh_price(100, "XRP", 1.0).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn empty_portfolio_summary_is_all_zero() {
    let db = common::setup().await;
    let users = UserRepository::new(db.clone());
    let service = PortfolioService::new(db);

    users.create(100, None).await.unwrap();

    let summary = service.pnl_summary(100).await.unwrap();
    assert_eq!(summary.total_investment, 0.0);
    assert_eq!(summary.current_value, 0.0);
    assert_eq!(summary.profit_loss, 0.0);
    assert_eq!(summary.profit_loss_pct, 0.0);
}
