//! CLI administration tool for library-api.
//!
//! Provides commands for registering users and books, viewing statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Register a user (prompts for missing fields)
//! cargo run --bin admin -- user create --name "Ada Lovelace" --email ada@example.com
//!
//! # Add a book
//! cargo run --bin admin -- book create --name "Dune" -y
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server: `DATABASE_URL`, or the `DB_*`
//! components. See [`library_api::config`].

use library_api::api::dto::book::BookRequest;
use library_api::api::dto::user::UserRequest;
use library_api::config;
use library_api::server::connect_pool;
use library_api::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing library-api.
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
    /// Manage library members
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage the book catalogue
    Book {
        #[command(subcommand)]
        action: BookAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Register a new user
    Create {
        /// Full name
        #[arg(short, long)]
        name: Option<String>,

        /// Contact email (optional)
        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Book management subcommands.
#[derive(Subcommand)]
enum BookAction {
    /// Add a book to the catalogue
    Create {
        /// Book title
        #[arg(short, long)]
        name: Option<String>,

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

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;
    let state = AppState::new(Arc::new(pool.clone()));

    match cli.command {
        Commands::User {
            action: UserAction::Create { name, email, yes },
        } => create_user(&state, name, email, yes).await?,
        Commands::Book {
            action: BookAction::Create { name, yes },
        } => create_book(&state, name, yes).await?,
        Commands::Stats => handle_stats(&state).await?,
        Commands::Db { action } => {
            handle_db_action(action, &pool, &config.database_url).await?
        }
    }

    Ok(())
}

/// Registers a user with interactive prompts.
///
/// Input goes through the same validation rules as `POST /users`.
async fn create_user(
    state: &AppState,
    name: Option<String>,
    email: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(e) => Some(e),
        None if skip_confirm => None,
        None => {
            let entered: String = Input::new()
                .with_prompt("Email (leave empty to skip)")
                .allow_empty(true)
                .interact_text()?;
            Some(entered).filter(|e| !e.trim().is_empty())
        }
    };

    let request = UserRequest { name, email };
    request.validate().context("Invalid user")?;

    println!();
    println!("{}", "User details:".bright_white().bold());
    println!("  Name:  {}", request.name.cyan());
    println!(
        "  Email: {}",
        request.email.as_deref().unwrap_or("-").cyan()
    );
    println!();

    if !skip_confirm && !confirm("Create this user?")? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let user = state
        .user_service
        .create_user(request.into())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!(
        "{} {}",
        "✅ User created with ID".green().bold(),
        user.id.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Adds a book with interactive prompts.
async fn create_book(state: &AppState, name: Option<String>, skip_confirm: bool) -> Result<()> {
    println!("{}", "📚 Create Book".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Title").interact_text()?,
    };

    let request = BookRequest { name };
    request.validate().context("Invalid book")?;

    println!("  Title: {}", request.name.cyan());
    println!();

    if !skip_confirm && !confirm("Create this book?")? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let book = state
        .book_service
        .create_book(request.into())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create book: {}", e))?;

    println!(
        "{} {}",
        "✅ Book created with ID".green().bold(),
        book.id.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(true).interact()?)
}

/// Displays library statistics.
///
/// Shows:
/// - Total number of users
/// - Total number of books
/// - Number of books currently borrowed
async fn handle_stats(state: &AppState) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (users_count, books_count, active_count) = tokio::try_join!(
        state.user_service.count_users(),
        state.book_service.count_books(),
        state.borrowing_service.count_active()
    )
    .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!(
        "  Users:          {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Books:          {}",
        books_count.to_string().bright_green().bold()
    );
    println!(
        "  Borrowed now:   {}",
        active_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!(
                "  URL:        {}",
                config::mask_connection_string(database_url).bright_white()
            );
            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
