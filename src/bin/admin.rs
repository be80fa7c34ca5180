//! CLI administration tool for kv-shortener.
//!
//! Runs the same services as the HTTP server directly against the configured
//! store, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/foo
//!
//! # Resolve a token
//! cargo run --bin admin -- resolve 1a2b3c4d
//!
//! # Per-domain counters (all, or the top N)
//! cargo run --bin admin -- domains
//! cargo run --bin admin -- domains --top 3
//!
//! # Check store connection
//! cargo run --bin admin -- ping
//! ```
//!
//! # Environment Variables
//!
//! Same store variables as the server (`REDIS_URL` or `REDIS_HOST`/`REDIS_PORT`/...).

use kv_shortener::application::services::{DomainStatsService, LinkService};
use kv_shortener::config;
use kv_shortener::domain::repositories::KeyValueStore;
use kv_shortener::server::build_store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing kv-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a long URL
    Shorten {
        /// The long URL
        url: String,
    },

    /// Print the long URL behind a token
    Resolve {
        /// The short token
        token: String,
    },

    /// Show shortened URL counts per domain
    Domains {
        /// Only show the N most shortened domains (N >= 1)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        top: Option<u64>,
    },

    /// Check store connection
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let store = build_store(&config).await?;

    match cli.command {
        Commands::Shorten { url } => shorten(store, &url).await?,
        Commands::Resolve { token } => resolve(store, &token).await?,
        Commands::Domains { top } => domains(store, top).await?,
        Commands::Ping => ping(store).await?,
    }

    Ok(())
}

async fn shorten(store: Arc<dyn KeyValueStore>, url: &str) -> Result<()> {
    let service = LinkService::new(store);

    let token = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Shortened".green().bold());
    println!("  URL:   {}", url.cyan());
    println!("  Token: {}", token.bright_yellow().bold());

    Ok(())
}

async fn resolve(store: Arc<dyn KeyValueStore>, token: &str) -> Result<()> {
    let service = LinkService::new(store);

    let long_url = service
        .resolve(token)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve {}: {}", token, e))?;

    println!("{}", long_url);

    Ok(())
}

/// Prints domain counters, highest first.
///
/// # Output Format
///
/// ```text
/// 📊 Domains
///
///   Domain                                   Count
///   ───────────────────────────────────────────────
///   example.com                              2
///   rust-lang.org                            1
/// ```
async fn domains(store: Arc<dyn KeyValueStore>, top: Option<u64>) -> Result<()> {
    let service = DomainStatsService::new(store);
    let limit = top.map_or(usize::MAX, |n| usize::try_from(n).unwrap_or(usize::MAX));

    let ranked = service
        .top_domains(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read domain counters: {}", e))?;

    println!("{}", "📊 Domains".bright_blue().bold());
    println!();

    if ranked.is_empty() {
        println!("{}", "  No URLs shortened yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<40} {}",
        "Domain".bright_white().bold(),
        "Count".bright_white().bold()
    );
    println!("  {}", "─".repeat(47).bright_black());

    for entry in &ranked {
        println!(
            "  {:<40} {}",
            entry.domain.cyan(),
            entry.count.to_string().bright_green().bold()
        );
    }

    println!();
    let total: u64 = ranked.iter().map(|e| e.count).sum();
    println!("  Total: {}", total.to_string().bright_white().bold());

    Ok(())
}

async fn ping(store: Arc<dyn KeyValueStore>) -> Result<()> {
    println!("{}", "🔍 Checking store connection...".bright_blue());

    store
        .ping()
        .await
        .map_err(|e| anyhow::anyhow!("Store unreachable: {}", e))?;

    println!("{}", "✅ Store connection OK".green().bold());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_domains_top_must_be_positive() {
        assert!(Cli::try_parse_from(["admin", "domains", "--top", "0"]).is_err());

        let cli = Cli::try_parse_from(["admin", "domains", "--top", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Domains { top: Some(3) }));

        let cli = Cli::try_parse_from(["admin", "domains"]).unwrap();
        assert!(matches!(cli.command, Commands::Domains { top: None }));
    }
}
