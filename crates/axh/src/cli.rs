//! Command line interface
//!
//! One subcommand per data-layer operation. Results are printed to stdout
//! as pretty JSON in the `{ "outcome": ..., "value": ... }` shape of
//! [`FetchOutcome`]; logs go to stderr. A failed fetch exits with status 2.

use crate::domain::FetchOutcome;
use crate::domain::value_objects::{BattleFeed, ItemCatalogKind, Token, TokenType};
use crate::infrastructure::{AppContext, PriceRefreshJob};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

/// Command line interface for Axie Helper
#[derive(Parser, Debug)]
#[command(name = "axh")]
#[command(about = "Axie Helper - cached Axie Infinity Origins data")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Profile, rank, ranked battles and inventory in one view
    Stats { user_id: String },
    /// Player profile
    Profile { user_id: String },
    /// Leaderboard entry of a player
    Rank { user_id: String },
    /// Battle history of a player
    Battles {
        user_id: String,
        #[arg(long, value_enum, default_value_t = FeedArg::Ranked)]
        feed: FeedArg,
    },
    /// Every item a player owns
    Items { user_id: String },
    /// Owned items split into charms and runes
    Inventory { user_id: String },
    /// One page of the global leaderboard
    Leaderboard {
        #[arg(long, default_value_t = 100)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Season list
    Seasons {
        /// Skip the cached copy
        #[arg(long)]
        force: bool,
    },
    /// Token price in one currency
    Price {
        token: Token,
        #[arg(long, default_value = "usd")]
        currency: String,
    },
    /// Marketplace floor prices of one token type
    Floor {
        token_type: TokenType,
        /// Restrict to these token ids
        token_ids: Vec<String>,
    },
    /// Resolve a user id or ronin address to an account
    Resolve { id_or_address: String },
    /// Account id behind a ronin or 0x address, via the marketplace
    Account { address: String },
    /// Marketplace details of one axie
    Axie { axie_id: u64 },
    /// Contest list, newest first
    Contests,
    /// One leaderboard page of the latest contest
    ContestLeaderboard {
        #[arg(long, default_value_t = 100)]
        limit: u32,
        /// Page number, counting from 1
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Winner of the opening rock-paper-scissors of a battle
    Replay {
        battle_id: String,
        #[arg(long, value_enum, default_value_t = FeedArg::Ranked)]
        feed: FeedArg,
    },
    /// Static item catalog (charms, runes or cards)
    Catalog { kind: ItemCatalogKind },
    /// Inspect or purge the cache store
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
    /// Keep the price board fresh until interrupted
    Serve,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CacheAction {
    /// Number of entries
    Size,
    /// Keys matching a glob pattern
    Keys {
        #[arg(default_value = "*")]
        pattern: String,
    },
    /// Delete keys matching a glob pattern
    Purge { pattern: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedArg {
    Ranked,
    Esport,
}

impl From<FeedArg> for BattleFeed {
    fn from(feed: FeedArg) -> Self {
        match feed {
            FeedArg::Ranked => Self::Ranked,
            FeedArg::Esport => Self::Esport,
        }
    }
}

/// Execute one command against a wired context
pub async fn run(context: &AppContext, command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Stats { user_id } => {
            let stats = context.player_stats().overall_stats(&user_id).await;
            print_json(&stats)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Profile { user_id } => report(context.player_data().profile(&user_id).await),
        Command::Rank { user_id } => report(context.player_data().rank(&user_id).await),
        Command::Battles { user_id, feed } => {
            report(context.player_data().battles(&user_id, feed.into()).await)
        }
        Command::Items { user_id } => report(context.player_data().items(&user_id).await),
        Command::Inventory { user_id } => {
            report(context.player_data().inventory(&user_id).await)
        }
        Command::Leaderboard { limit, offset } => {
            report(context.player_data().leaderboard(limit, offset).await)
        }
        Command::Seasons { force } => report(context.reference().seasons(force).await),
        Command::Price { token, currency } => {
            report(context.market().token_price(token, &currency).await)
        }
        Command::Floor {
            token_type,
            token_ids,
        } => report(context.market().min_prices(token_type, &token_ids).await),
        Command::Resolve { id_or_address } => {
            report(context.reference().resolve_profile(&id_or_address).await)
        }
        Command::Account { address } => {
            report(context.market().account_by_address(&address).await)
        }
        Command::Axie { axie_id } => report(context.market().axie_details(axie_id).await),
        Command::Contests => report(context.contests().contests().await),
        Command::ContestLeaderboard { limit, page } => {
            report(context.contests().contest_leaderboard(limit, page).await)
        }
        Command::Replay { battle_id, feed } => {
            report(context.battle_replays().rps_winner(&battle_id, feed.into()).await)
        }
        Command::Catalog { kind } => report(context.reference().item_catalog(kind).await),
        Command::Cache { action } => run_cache(context, action).await,
        Command::Serve => serve(context).await,
    }
}

async fn run_cache(context: &AppContext, action: CacheAction) -> anyhow::Result<ExitCode> {
    let admin = context.cache_admin();
    match action {
        CacheAction::Size => print_json(&admin.size().await?)?,
        CacheAction::Keys { pattern } => print_json(&admin.keys(&pattern).await?)?,
        CacheAction::Purge { pattern } => {
            let deleted = admin.purge(&pattern).await?;
            info!(pattern = %pattern, deleted, "cache purged");
            print_json(&deleted)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

async fn serve(context: &AppContext) -> anyhow::Result<ExitCode> {
    let jobs = &context.config.jobs;
    if !jobs.price_refresh_enabled {
        warn!("Price refresh job is disabled; nothing to serve");
        return Ok(ExitCode::SUCCESS);
    }

    let job = PriceRefreshJob::start(context.price_refresher(), jobs).await?;
    tokio::signal::ctrl_c().await?;
    info!("Shutdown requested");
    job.shutdown().await?;
    Ok(ExitCode::SUCCESS)
}

fn report<T: Serialize>(outcome: FetchOutcome<T>) -> anyhow::Result<ExitCode> {
    print_json(&outcome)?;
    Ok(ExitCode::from(exit_status(&outcome)))
}

/// Status 2 for a failed fetch, 0 otherwise
pub fn exit_status<T>(outcome: &FetchOutcome<T>) -> u8 {
    if outcome.is_failed() { 2 } else { 0 }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
