use crate::domain::{Account, AccountId, Cents};
use crate::storage::Repository;

use super::{AccountRole, AppError};

/// Application service providing the ledger operations: account creation,
/// balance queries, deposits, withdrawals and transfers. This is the
/// primary interface for any client (CLI, tests, a future API).
///
/// The service holds no account state between calls; every operation loads
/// fresh from the repository, validates, mutates and persists.
pub struct LedgerService {
    repo: Repository,
}

impl LedgerService {
    /// Create a new ledger service with the given repository.
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Initialize a new database at the given path.
    pub async fn init(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}?mode=rwc", database_path);
        let repo = Repository::init(&db_url).await?;
        Ok(Self::new(repo))
    }

    /// Connect to an existing database.
    pub async fn connect(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}", database_path);
        let repo = Repository::connect(&db_url).await?;
        Ok(Self::new(repo))
    }

    /// Persist a caller-built account and return the persisted entity.
    /// No validation happens here; the account value is taken as-is.
    pub async fn create_account(&self, account: Account) -> Result<Account, AppError> {
        self.repo.save_account(&account).await?;
        Ok(account)
    }

    /// Get an account by id.
    pub async fn get_account(&self, id: AccountId) -> Result<Account, AppError> {
        self.repo
            .get_account(id)
            .await?
            .ok_or(AppError::AccountNotFound(AccountRole::Sole))
    }

    /// List all accounts.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.repo.list_accounts().await?)
    }

    /// Current balance of an account. Read-only, no side effects.
    pub async fn get_balance(&self, id: AccountId) -> Result<Cents, AppError> {
        let account = self.get_account(id).await?;
        Ok(account.balance_cents)
    }

    /// Withdraw `amount` from an account and return the new balance.
    ///
    /// Only existence is checked: an inactive account can withdraw, and the
    /// balance may go negative. Transfer is the operation that enforces
    /// activeness and sufficient funds; withdraw is deliberately narrower.
    pub async fn withdraw(&self, id: AccountId, amount: Cents) -> Result<Cents, AppError> {
        let mut account = self.get_account(id).await?;

        account.debit(amount);
        self.repo.save_account(&account).await?;

        Ok(account.balance_cents)
    }

    /// Deposit `amount` into an account.
    ///
    /// Fails before touching storage if the account is missing or inactive.
    pub async fn deposit(&self, id: AccountId, amount: Cents) -> Result<(), AppError> {
        let mut account = self.get_account(id).await?;

        if !account.is_active() {
            return Err(AppError::AccountInactive(AccountRole::Sole));
        }

        account.credit(amount);
        self.repo.save_account(&account).await?;

        Ok(())
    }

    /// Move `amount` from one account to another and return the source's
    /// new balance.
    ///
    /// Validation is an ordered, short-circuiting pipeline: source exists,
    /// destination exists, source active, destination active, source has at
    /// least `amount` (equality allowed). The first failing check is the
    /// one reported. Both balance writes happen in a single database
    /// transaction, so a half-applied transfer is never observable.
    pub async fn transfer(
        &self,
        source_id: AccountId,
        destination_id: AccountId,
        amount: Cents,
    ) -> Result<Cents, AppError> {
        let mut source = self
            .repo
            .get_account(source_id)
            .await?
            .ok_or(AppError::AccountNotFound(AccountRole::Source))?;

        let mut destination = self
            .repo
            .get_account(destination_id)
            .await?
            .ok_or(AppError::AccountNotFound(AccountRole::Destination))?;

        if !source.is_active() {
            return Err(AppError::AccountInactive(AccountRole::Source));
        }
        if !destination.is_active() {
            return Err(AppError::AccountInactive(AccountRole::Destination));
        }

        if source.balance_cents < amount {
            return Err(AppError::InsufficientFunds {
                balance: source.balance_cents,
                required: amount,
            });
        }

        // A self-transfer nets to zero; writing two stale copies of the
        // same row would instead apply only the credit.
        if source_id == destination_id {
            return Ok(source.balance_cents);
        }

        source.debit(amount);
        destination.credit(amount);

        self.repo.save_account_pair(&source, &destination).await?;

        Ok(source.balance_cents)
    }
}
