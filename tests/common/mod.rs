// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use arca::application::LedgerService;
use arca::domain::{Account, AccountId, Cents};
use tempfile::TempDir;

/// Helper to create a test service with a temporary database
pub async fn test_service() -> Result<(LedgerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let service = LedgerService::init(db_path.to_str().unwrap()).await?;
    Ok((service, temp_dir))
}

/// Create an account with the given holder and balance, returning its id.
pub async fn open_account(
    service: &LedgerService,
    holder: &str,
    balance_cents: Cents,
) -> Result<AccountId> {
    let account = service
        .create_account(Account::new(holder, balance_cents))
        .await?;
    Ok(account.id)
}

/// Create an inactive account with the given holder and balance.
pub async fn open_inactive_account(
    service: &LedgerService,
    holder: &str,
    balance_cents: Cents,
) -> Result<AccountId> {
    let account = service
        .create_account(Account::new(holder, balance_cents).with_active(false))
        .await?;
    Ok(account.id)
}

/// Test fixture: the standard two-account setup used by transfer tests.
/// Maria holds 100.00, Joao holds 30.00.
pub struct StandardAccounts {
    pub maria: AccountId,
    pub joao: AccountId,
}

impl StandardAccounts {
    pub async fn create(service: &LedgerService) -> Result<Self> {
        Ok(Self {
            maria: open_account(service, "maria", 10_000).await?,
            joao: open_account(service, "joao", 3_000).await?,
        })
    }
}
