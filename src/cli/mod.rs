use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::application::LedgerService;
use crate::domain::{Account, AccountId, format_cents, parse_cents};

/// Arca - Bank-Account Ledger
#[derive(Parser)]
#[command(name = "arca")]
#[command(about = "A bank-account ledger for the command line")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "arca.db")]
    pub database: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new database
    Init,

    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Show the balance of an account
    Balance {
        /// Account ID
        id: String,
    },

    /// Deposit into an account
    Deposit {
        /// Account ID
        id: String,

        /// Amount to deposit (e.g., "50.00" or "50")
        amount: String,
    },

    /// Withdraw from an account
    Withdraw {
        /// Account ID
        id: String,

        /// Amount to withdraw (e.g., "50.00" or "50")
        amount: String,
    },

    /// Transfer funds between two accounts
    Transfer {
        /// Amount to transfer (e.g., "50.00" or "50")
        amount: String,

        /// Source account ID
        #[arg(long)]
        from: String,

        /// Destination account ID
        #[arg(long)]
        to: String,
    },
}

#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        /// Account holder name
        holder: String,

        /// Initial balance (e.g., "100.00", defaults to zero)
        #[arg(short, long, default_value = "0")]
        balance: String,

        /// Create the account in the inactive state
        #[arg(long)]
        inactive: bool,
    },

    /// List all accounts
    List {
        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show detailed account information
    Show {
        /// Account ID
        id: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Init => {
                LedgerService::init(&self.database).await?;
                println!("Database initialized: {}", self.database);
            }

            Commands::Account(account_cmd) => {
                let service = LedgerService::connect(&self.database).await?;
                run_account_command(&service, account_cmd).await?;
            }

            Commands::Balance { id } => {
                let service = LedgerService::connect(&self.database).await?;
                let id = parse_account_id(&id)?;
                let balance = service.get_balance(id).await?;
                println!("{}", format_cents(balance));
            }

            Commands::Deposit { id, amount } => {
                let service = LedgerService::connect(&self.database).await?;
                let id = parse_account_id(&id)?;
                let amount_cents = parse_amount(&amount)?;

                service.deposit(id, amount_cents).await?;
                println!("Deposited {} into {}", format_cents(amount_cents), id);
            }

            Commands::Withdraw { id, amount } => {
                let service = LedgerService::connect(&self.database).await?;
                let id = parse_account_id(&id)?;
                let amount_cents = parse_amount(&amount)?;

                let new_balance = service.withdraw(id, amount_cents).await?;
                println!(
                    "Withdrew {} from {} (new balance: {})",
                    format_cents(amount_cents),
                    id,
                    format_cents(new_balance)
                );
            }

            Commands::Transfer { amount, from, to } => {
                let service = LedgerService::connect(&self.database).await?;
                let from = parse_account_id(&from)?;
                let to = parse_account_id(&to)?;
                let amount_cents = parse_amount(&amount)?;

                let new_balance = service.transfer(from, to, amount_cents).await?;
                println!(
                    "Transferred {}: {} -> {} (source balance: {})",
                    format_cents(amount_cents),
                    from,
                    to,
                    format_cents(new_balance)
                );
            }
        }
        Ok(())
    }
}

async fn run_account_command(service: &LedgerService, command: AccountCommands) -> Result<()> {
    match command {
        AccountCommands::Create {
            holder,
            balance,
            inactive,
        } => {
            let balance_cents = parse_amount(&balance)?;
            let account = Account::new(holder, balance_cents).with_active(!inactive);
            let created = service.create_account(account).await?;

            println!(
                "Created account {} for {} (balance: {})",
                created.id,
                created.holder_name,
                format_cents(created.balance_cents)
            );
        }

        AccountCommands::List { json } => {
            let accounts = service.list_accounts().await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&accounts)?);
            } else if accounts.is_empty() {
                println!("No accounts.");
            } else {
                for account in accounts {
                    let status = if account.active { "" } else { " [inactive]" };
                    println!(
                        "{}  {:<20} {:>12}{}",
                        account.id,
                        account.holder_name,
                        format_cents(account.balance_cents),
                        status
                    );
                }
            }
        }

        AccountCommands::Show { id } => {
            let id = parse_account_id(&id)?;
            let account = service.get_account(id).await?;

            println!("Account:  {}", account.id);
            println!("Holder:   {}", account.holder_name);
            println!("Balance:  {}", format_cents(account.balance_cents));
            println!(
                "Status:   {}",
                if account.active { "active" } else { "inactive" }
            );
            println!("Created:  {}", account.created_at.to_rfc3339());
        }
    }
    Ok(())
}

fn parse_account_id(input: &str) -> Result<AccountId> {
    Uuid::parse_str(input).context("Invalid account ID format (expected UUID)")
}

fn parse_amount(input: &str) -> Result<i64> {
    parse_cents(input).context("Invalid amount format. Use '50.00' or '50'")
}
