use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::domain::{Account, AccountId};

use super::MIGRATION_001_INITIAL;

/// Repository for persisting and querying accounts. Absence on lookup is a
/// normal outcome (`Ok(None)`), not an error; callers decide what a missing
/// account means for their operation.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database at the given path.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(MIGRATION_001_INITIAL)
            .execute(&self.pool)
            .await
            .context("Failed to run migration 001")?;
        Ok(())
    }

    /// Initialize a new database (connect + migrate).
    pub async fn init(database_url: &str) -> Result<Self> {
        let repo = Self::connect(database_url).await?;
        repo.migrate().await?;
        Ok(repo)
    }

    /// Save an account. Upsert: inserts on first save, overwrites the
    /// mutable columns on every save after that.
    pub async fn save_account(&self, account: &Account) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (id, holder_name, balance_cents, active, created_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                holder_name = excluded.holder_name,
                balance_cents = excluded.balance_cents,
                active = excluded.active
            "#,
        )
        .bind(account.id.to_string())
        .bind(&account.holder_name)
        .bind(account.balance_cents)
        .bind(account.active)
        .bind(account.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .context("Failed to save account")?;
        Ok(())
    }

    /// Save two accounts in one transaction. Used by transfer so the debit
    /// and the credit reach durable state together or not at all.
    pub async fn save_account_pair(&self, first: &Account, second: &Account) -> Result<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin transaction")?;

        for account in [first, second] {
            sqlx::query(
                r#"
                INSERT INTO accounts (id, holder_name, balance_cents, active, created_at)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    holder_name = excluded.holder_name,
                    balance_cents = excluded.balance_cents,
                    active = excluded.active
                "#,
            )
            .bind(account.id.to_string())
            .bind(&account.holder_name)
            .bind(account.balance_cents)
            .bind(account.active)
            .bind(account.created_at.to_rfc3339())
            .execute(&mut *tx)
            .await
            .context("Failed to save account in transaction")?;
        }

        tx.commit().await.context("Failed to commit transaction")?;
        Ok(())
    }

    /// Get an account by ID.
    pub async fn get_account(&self, id: AccountId) -> Result<Option<Account>> {
        let row = sqlx::query(
            r#"
            SELECT id, holder_name, balance_cents, active, created_at
            FROM accounts
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch account")?;

        match row {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    /// List all accounts, ordered by holder name.
    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        let rows = sqlx::query(
            r#"
            SELECT id, holder_name, balance_cents, active, created_at
            FROM accounts
            ORDER BY holder_name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list accounts")?;

        rows.iter().map(Self::row_to_account).collect()
    }

    fn row_to_account(row: &sqlx::sqlite::SqliteRow) -> Result<Account> {
        let id_str: String = row.get("id");
        let created_at_str: String = row.get("created_at");

        Ok(Account {
            id: Uuid::parse_str(&id_str).context("Invalid account ID")?,
            holder_name: row.get("holder_name"),
            balance_cents: row.get("balance_cents"),
            active: row.get::<i32, _>("active") != 0,
            created_at: DateTime::parse_from_rfc3339(&created_at_str)
                .context("Invalid created_at timestamp")?
                .with_timezone(&Utc),
        })
    }
}
