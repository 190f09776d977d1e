// src/main.rs
// ORACULUM QA - INTERACTIVE FACT DESK
// Reads questions from stdin, answers them from Wikipedia infoboxes.

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod actions;
mod config;
mod dispatcher;
mod error;
mod facts;
mod pattern;
mod query;
mod session;
mod wiki;

use actions::ActionRegistry;
use config::Config;
use dispatcher::Dispatcher;
use session::QuerySession;
use wiki::WikiScout;

fn main() -> Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout stays a clean conversation
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("🚀 Oraculum QA starting against {}", config.wiki_url);

    // 1. Knowledge source
    let scout = WikiScout::new(&config.wiki_url, &config.user_agent, config.timeout())
        .context("failed to build the Wikipedia client")?;

    // 2. Question registry (built once, read-only from here on)
    let registry = ActionRegistry::standard(Arc::new(scout))
        .context("failed to build the question registry")?;
    info!("   -> {} question templates registered", registry.len());

    // 3. Converse
    let dispatcher = Dispatcher::new(registry);
    QuerySession::new(&dispatcher)
        .run(io::stdin().lock(), io::stdout().lock())
        .context("terminal I/O failed")?;

    Ok(())
}
