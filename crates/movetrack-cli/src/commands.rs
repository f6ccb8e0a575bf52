use anyhow::{Context, Result};
use movetrack_core::MovementStore;
use std::path::Path;

use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::logging::init_tracing;
use crate::presentation::ConsoleRenderer;
use crate::snapshot_file::{self, SnapshotWriter};
use crate::types::OutputFormat;

pub fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.log_level);

    let config = Config::load(cli.config.as_deref())?;
    let renderer = ConsoleRenderer::new(cli.format == OutputFormat::Json);

    match cli.command {
        Commands::List { limit } => {
            let store = open_store(cli.snapshot.as_deref(), &config)?;
            handlers::list::handle(&store, limit, &renderer)
        }

        Commands::Add(args) => {
            let actor = config
                .resolve_actor(cli.actor.as_deref())
                .context("No actor configured: pass --actor or set MOVETRACK_ACTOR")?;
            let mut store = open_store(cli.snapshot.as_deref(), &config)?;
            handlers::add::handle(&mut store, args, &actor, cli.snapshot.as_deref(), &renderer)
        }

        Commands::Import { files } => {
            let mut store = open_store(cli.snapshot.as_deref(), &config)?;
            handlers::import::handle(&mut store, &files, cli.snapshot.as_deref(), &renderer)
        }

        Commands::Check { file } => handlers::check::handle(&file, &renderer),

        Commands::Suppliers { file, tab, all } => {
            handlers::suppliers::handle(&file, tab, all, &renderer)
        }
    }
}

/// Store seeded from `--snapshot` (if any), with the snapshot file subscribed as a listener
fn open_store(snapshot: Option<&Path>, config: &Config) -> Result<MovementStore> {
    let records = match snapshot {
        Some(path) => snapshot_file::load(path)?,
        None => Vec::new(),
    };

    let mut store = MovementStore::with_records(config.assigner(), records)
        .context("Snapshot file contains duplicate movement ids")?
        .with_policy(config.validation);

    if let Some(path) = snapshot {
        store.subscribe(SnapshotWriter::new(path));
    }

    tracing::debug!(records = store.len(), policy = ?store.policy(), "store opened");
    Ok(store)
}
