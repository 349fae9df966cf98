//! CLI administration tool for gatelink.
//!
//! Provides commands for bootstrapping accounts, minting invites, and issuing
//! API tokens without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create an account (e.g. the operator's own)
//! cargo run --bin admin -- account create --email admin@example.com --admin
//!
//! # Promote an existing account to admin
//! cargo run --bin admin -- account promote admin@example.com
//!
//! # Mint an invite with five uses
//! cargo run --bin admin -- invite create --email admin@example.com --max-uses 5
//!
//! # List invites
//! cargo run --bin admin -- invite list
//!
//! # Issue an API token for an account
//! cargo run --bin admin -- token create --email admin@example.com --name "CI"
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `TOKEN_SIGNING_SECRET` (required for `token create`)

use gatelink::application::services::{AuthService, InviteService};
use gatelink::domain::entities::NewAccount;
use gatelink::domain::repositories::{AccountRepository, InviteRepository, TokenRepository};
use gatelink::infrastructure::persistence::{
    PgAccountRepository, PgInviteRepository, PgTokenRepository,
};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing gatelink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Manage invites
    Invite {
        #[command(subcommand)]
        action: InviteAction,
    },

    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum AccountAction {
    /// Create a new account directly
    Create {
        /// Email address for the account
        #[arg(short, long)]
        email: String,

        /// Grant admin rights
        #[arg(long)]
        admin: bool,
    },

    /// Promote an existing account to admin
    Promote {
        /// Email of the account to promote
        email: String,
    },

    /// List all accounts
    List,
}

/// Invite management subcommands.
#[derive(Subcommand)]
enum InviteAction {
    /// Mint a new invite code
    Create {
        /// Email of the admin minting the invite
        #[arg(short, long)]
        email: String,

        /// Maximum number of redemptions
        #[arg(short, long, default_value_t = 1)]
        max_uses: i32,
    },

    /// List all invites
    List,

    /// Delete an invite by id
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Issue a new API token for an account
    Create {
        /// Email of the owning account
        #[arg(short, long)]
        email: String,

        /// Token name (e.g. "CI", "Mobile App")
        #[arg(short, long, default_value = "default")]
        name: String,
    },

    /// Revoke an API token by id
    Revoke {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = Arc::new(PgPool::connect(&database_url).await?);

    match cli.command {
        Commands::Account { action } => handle_account(action, pool).await,
        Commands::Invite { action } => handle_invite(action, pool).await,
        Commands::Token { action } => handle_token(action, pool).await,
        Commands::Db { action } => handle_db(action, pool).await,
    }
}

async fn handle_account(action: AccountAction, pool: Arc<PgPool>) -> Result<()> {
    let accounts = PgAccountRepository::new(pool);

    match action {
        AccountAction::Create { email, admin } => {
            let account = accounts
                .create(NewAccount {
                    email,
                    is_admin: admin,
                })
                .await?;

            println!(
                "{} account {} (id {})",
                "Created".green().bold(),
                account.email.cyan(),
                account.id
            );
            if account.is_admin {
                println!("  {}", "admin rights granted".yellow());
            }
        }
        AccountAction::Promote { email } => {
            let account = accounts
                .find_by_email(&email)
                .await?
                .with_context(|| format!("No account with email '{}'", email))?;

            if account.is_admin {
                println!("{} is already an admin", account.email.cyan());
                return Ok(());
            }

            accounts.set_admin(account.id, true).await?;
            println!("{} {} to admin", "Promoted".green().bold(), account.email.cyan());
        }
        AccountAction::List => {
            let all = accounts.list().await?;
            if all.is_empty() {
                println!("No accounts");
                return Ok(());
            }
            for account in all {
                let role = if account.is_admin { "admin".yellow() } else { "user".normal() };
                println!(
                    "{:>6}  {:<32} {}  {}",
                    account.id,
                    account.email,
                    role,
                    account.created_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
    }

    Ok(())
}

async fn handle_invite(action: InviteAction, pool: Arc<PgPool>) -> Result<()> {
    let accounts = PgAccountRepository::new(pool.clone());
    let invites = Arc::new(PgInviteRepository::new(pool));

    match action {
        InviteAction::Create { email, max_uses } => {
            let minter = accounts
                .find_by_email(&email)
                .await?
                .with_context(|| format!("No account with email '{}'", email))?;

            if !minter.is_admin {
                bail!(
                    "Account '{}' is not an admin; run `admin account promote {}` first",
                    email,
                    email
                );
            }

            let service = InviteService::new(invites);
            let invite = service.create_invite(&minter, max_uses).await?;

            println!("{} invite", "Minted".green().bold());
            println!("  code:     {}", invite.code.cyan().bold());
            println!("  max uses: {}", invite.max_uses);
        }
        InviteAction::List => {
            let all = invites.list().await?;
            if all.is_empty() {
                println!("No invites");
                return Ok(());
            }
            for invite in all {
                let status = if invite.is_exhausted() {
                    "exhausted".red()
                } else {
                    "active".green()
                };
                println!(
                    "{:>6}  {:<10} {}/{} {}  {}",
                    invite.id,
                    invite.code,
                    invite.uses_count,
                    invite.max_uses,
                    status,
                    invite.created_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        InviteAction::Delete { id, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete invite {}?", id))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("Aborted");
                    return Ok(());
                }
            }

            if invites.delete(id).await? {
                println!("{} invite {}", "Deleted".green().bold(), id);
            } else {
                bail!("No invite with id {}", id);
            }
        }
    }

    Ok(())
}

async fn handle_token(action: TokenAction, pool: Arc<PgPool>) -> Result<()> {
    let accounts = PgAccountRepository::new(pool.clone());
    let tokens = Arc::new(PgTokenRepository::new(pool));

    match action {
        TokenAction::Create { email, name } => {
            let signing_secret = std::env::var("TOKEN_SIGNING_SECRET")
                .context("TOKEN_SIGNING_SECRET must be set")?;

            let account = accounts
                .find_by_email(&email)
                .await?
                .with_context(|| format!("No account with email '{}'", email))?;

            let service = AuthService::new(tokens, signing_secret);
            let (raw, record) = service.issue_token(account.id, &name).await?;

            println!("{} token '{}' for {}", "Issued".green().bold(), record.name, email.cyan());
            println!();
            println!("  {}", raw.bold());
            println!();
            println!("{}", "Store it now; the raw token is not recoverable.".yellow());
        }
        TokenAction::Revoke { id, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Revoke token {}?", id))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("Aborted");
                    return Ok(());
                }
            }

            if tokens.revoke_token(id).await? {
                println!("{} token {}", "Revoked".green().bold(), id);
            } else {
                bail!("No active token with id {}", id);
            }
        }
    }

    Ok(())
}

async fn handle_db(action: DbAction, pool: Arc<PgPool>) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query_scalar::<_, i32>("SELECT 1")
                .fetch_one(pool.as_ref())
                .await
                .context("Database check failed")?;
            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}
