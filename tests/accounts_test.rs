mod common;

use anyhow::Result;
use arca::application::{AccountRole, AppError};
use arca::domain::Account;
use common::{open_account, open_inactive_account, test_service};
use uuid::Uuid;

#[tokio::test]
async fn test_create_account_returns_persisted_entity() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let account = Account::new("maria", 10_000);
    let id = account.id;

    let created = service.create_account(account).await?;
    assert_eq!(created.id, id);
    assert_eq!(created.holder_name, "maria");
    assert_eq!(created.balance_cents, 10_000);
    assert!(created.active);

    // And it is actually in the store, not just echoed back
    let loaded = service.get_account(id).await?;
    assert_eq!(loaded.holder_name, "maria");
    assert_eq!(loaded.balance_cents, 10_000);

    Ok(())
}

#[tokio::test]
async fn test_get_balance() -> Result<()> {
    let (service, _temp) = test_service().await?;
    let id = open_account(&service, "maria", 10_000).await?;

    assert_eq!(service.get_balance(id).await?, 10_000);

    Ok(())
}

#[tokio::test]
async fn test_get_balance_missing_account() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let err = service.get_balance(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::AccountNotFound(AccountRole::Sole)));

    Ok(())
}

#[tokio::test]
async fn test_missing_account_message_is_identifier_independent() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let first = service.get_balance(Uuid::new_v4()).await.unwrap_err();
    let second = service.get_balance(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(first.to_string(), "account not found");

    Ok(())
}

#[tokio::test]
async fn test_deposit_adds_to_balance() -> Result<()> {
    let (service, _temp) = test_service().await?;
    let id = open_account(&service, "maria", 10_000).await?;

    service.deposit(id, 2_000).await?;

    assert_eq!(service.get_balance(id).await?, 12_000);

    Ok(())
}

#[tokio::test]
async fn test_deposit_missing_account() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let err = service.deposit(Uuid::new_v4(), 2_000).await.unwrap_err();
    assert!(matches!(err, AppError::AccountNotFound(AccountRole::Sole)));

    Ok(())
}

#[tokio::test]
async fn test_deposit_inactive_account_leaves_balance_unchanged() -> Result<()> {
    let (service, _temp) = test_service().await?;
    let id = open_inactive_account(&service, "maria", 10_000).await?;

    let err = service.deposit(id, 2_000).await.unwrap_err();
    assert!(matches!(err, AppError::AccountInactive(AccountRole::Sole)));

    // Failing path never reached the save
    assert_eq!(service.get_balance(id).await?, 10_000);

    Ok(())
}

#[tokio::test]
async fn test_withdraw_returns_new_balance() -> Result<()> {
    let (service, _temp) = test_service().await?;
    let id = open_account(&service, "maria", 10_000).await?;

    let new_balance = service.withdraw(id, 5_000).await?;
    assert_eq!(new_balance, 5_000);

    // Persisted, not just returned
    assert_eq!(service.get_balance(id).await?, 5_000);

    Ok(())
}

#[tokio::test]
async fn test_withdraw_missing_account() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let err = service.withdraw(Uuid::new_v4(), 100).await.unwrap_err();
    assert!(matches!(err, AppError::AccountNotFound(AccountRole::Sole)));

    Ok(())
}

#[tokio::test]
async fn test_withdraw_may_overdraw() -> Result<()> {
    // Withdraw checks existence only; unlike transfer it has no
    // sufficient-funds guard, so the balance can go negative.
    let (service, _temp) = test_service().await?;
    let id = open_account(&service, "maria", 10_000).await?;

    let new_balance = service.withdraw(id, 15_000).await?;
    assert_eq!(new_balance, -5_000);
    assert_eq!(service.get_balance(id).await?, -5_000);

    Ok(())
}

#[tokio::test]
async fn test_withdraw_ignores_inactive_flag() -> Result<()> {
    // Activeness gates deposits and transfers only.
    let (service, _temp) = test_service().await?;
    let id = open_inactive_account(&service, "maria", 10_000).await?;

    let new_balance = service.withdraw(id, 1_000).await?;
    assert_eq!(new_balance, 9_000);

    Ok(())
}

#[tokio::test]
async fn test_list_accounts_ordered_by_holder() -> Result<()> {
    let (service, _temp) = test_service().await?;
    open_account(&service, "joao", 3_000).await?;
    open_account(&service, "ana", 1_000).await?;
    open_account(&service, "maria", 10_000).await?;

    let accounts = service.list_accounts().await?;
    let holders: Vec<&str> = accounts.iter().map(|a| a.holder_name.as_str()).collect();
    assert_eq!(holders, vec!["ana", "joao", "maria"]);

    Ok(())
}

#[tokio::test]
async fn test_create_account_upsert_overwrites_existing() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let account = Account::new("maria", 10_000);
    let id = account.id;
    service.create_account(account.clone()).await?;

    // Saving the same id again updates in place
    let mut updated = account;
    updated.holder_name = "maria silva".into();
    updated.balance_cents = 12_345;
    service.create_account(updated).await?;

    let loaded = service.get_account(id).await?;
    assert_eq!(loaded.holder_name, "maria silva");
    assert_eq!(loaded.balance_cents, 12_345);
    assert_eq!(service.list_accounts().await?.len(), 1);

    Ok(())
}
