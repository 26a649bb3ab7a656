//! CLI administration tool for twinlink.
//!
//! Operates on the same Redis namespaces as the server, through the same
//! services, so links created here behave exactly like ones submitted via
//! the web form.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (or fetch its existing aliases)
//! cargo run --bin admin -- shorten https://example.com/page
//!
//! # Look up the URL behind an alias
//! cargo run --bin admin -- resolve brave-quiet-otter
//!
//! # Drop a link and both of its aliases
//! cargo run --bin admin -- forget https://example.com/page
//!
//! # Check both Redis databases
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `twinlink::config`.

use twinlink::api::dto::shorten::ShortenForm;
use twinlink::config::{self, Config};
use twinlink::error::AppError;
use twinlink::server::{StoreHandles, connect_store};
use twinlink::state::AppState;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use validator::Validate;

/// CLI tool for managing twinlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL, or print the aliases it already has
    Shorten {
        /// Long URL to shorten
        url: String,
    },

    /// Print the URL behind an alias (refreshes the link like a visit)
    Resolve {
        /// Human slug or bot token
        alias: String,
    },

    /// Delete a link and both of its aliases
    Forget {
        /// Long URL to forget
        url: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check both namespaces are reachable
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    config.ensure_shared_backend()?;

    let store = connect_store(&config).await?;

    match cli.command {
        Commands::Shorten { url } => shorten(&config, &store, &url).await,
        Commands::Resolve { alias } => resolve(&config, &store, &alias).await,
        Commands::Forget { url, yes } => forget(&config, &store, &url, yes).await,
        Commands::Db { action } => match action {
            DbAction::Check => check_db(&config, &store).await,
        },
    }
}

fn build_state(config: &Config, store: &StoreHandles) -> Result<AppState> {
    Ok(AppState::new(
        store.canonical.clone(),
        store.redirection.clone(),
        config.link_settings(),
    )?)
}

/// Shortens `url` and prints both aliases with their public short links.
async fn shorten(config: &Config, store: &StoreHandles, url: &str) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let form = ShortenForm {
        input_url: url.to_string(),
    }
    .trimmed();
    form.validate()
        .map_err(|e| anyhow::anyhow!("Rejected input: {}", e))?;

    let state = build_state(config, store)?;
    let service = &state.link_service;
    let record = service
        .shorten_or_fetch(&form.input_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten: {}", e))?;

    println!("  Human: {}", service.short_url(&record.human).cyan());
    println!("  Bot:   {}", service.short_url(&record.bot).bright_yellow());
    println!();
    println!(
        "  Expires after {} of inactivity",
        format!("{}s", config.expiration_time).bright_white()
    );
    println!();

    Ok(())
}

/// Resolves `alias` and prints its long URL.
async fn resolve(config: &Config, store: &StoreHandles, alias: &str) -> Result<()> {
    println!("{}", "🔎 Resolve Alias".bright_blue().bold());
    println!();

    let state = build_state(config, store)?;
    match state.redirect_service.resolve(alias).await {
        Ok(long_url) => {
            println!("  {} → {}", alias.cyan(), long_url.bright_white());
            println!();
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", "  Alias not found or expired".yellow());
            println!();
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve: {}", e)),
    }
}

/// Deletes the record for `url` after confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes`
/// - Aliases already reassigned to another URL are left alone
async fn forget(config: &Config, store: &StoreHandles, url: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Forget Link".bright_blue().bold());
    println!();

    let record = store
        .canonical
        .get(url)
        .await
        .map_err(|e| anyhow::anyhow!("Store error: {}", e))?;

    let Some(record) = record else {
        println!("{}", "⚠️  No record for this URL".yellow());
        return Ok(());
    };

    println!("  URL:   {}", url.bright_white());
    println!("  Human: {}", record.human.cyan());
    println!("  Bot:   {}", record.bot.bright_yellow());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link and both aliases?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let state = build_state(config, store)?;
    let removed = state
        .link_service
        .forget(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to forget: {}", e))?;

    println!();
    if removed {
        println!("{}", "✅ Link forgotten".green().bold());
    } else {
        println!("{}", "⚠️  Link expired before it could be removed".yellow());
    }
    println!();

    Ok(())
}

/// Checks both namespaces respond.
async fn check_db(config: &Config, store: &StoreHandles) -> Result<()> {
    println!("{}", "🔌 Checking storage".bright_blue().bold());
    println!();

    let canonical = store.canonical.health_check().await;
    let redirection = store.redirection.health_check().await;

    print_check(
        &format!("canonical (db {})", config.redis_canonical_db),
        canonical,
    );
    print_check(
        &format!("redirection (db {})", config.redis_redirection_db),
        redirection,
    );
    println!();

    if canonical && redirection {
        println!("{}", "✅ Storage is healthy".green().bold());
        Ok(())
    } else {
        anyhow::bail!("Storage check failed")
    }
}

fn print_check(label: &str, healthy: bool) {
    let status = if healthy { "OK".green() } else { "UNREACHABLE".red() };
    println!("  {:<24} {}", label.bright_white(), status);
}
