use crate::types::{LogLevel, OutputFormat};
use clap::{Args, Parser, Subcommand};
use movetrack_types::SupplierSlot;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "movetrack")]
#[command(about = "Track vehicle movements between logistics stages", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $MOVETRACK_CONFIG or the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON file holding the movement list; loaded first, rewritten after add/import
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Identity recorded as executedBy for movements added with `add`
    #[arg(long, global = true)]
    pub actor: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the movement history, newest first
    List {
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Record a single movement
    Add(AddArgs),

    /// Bulk-add movements from CSV files (one batch per file)
    Import {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Report rows with missing required fields without importing anything
    Check { file: PathBuf },

    /// Show supplier data (JSON or TOML) as tabs
    Suppliers {
        file: PathBuf,

        /// Tab to show (supplier1..supplier4); defaults to the first supplier present
        #[arg(long, value_parser = clap::value_parser!(SupplierSlot))]
        tab: Option<SupplierSlot>,

        /// Show every tab instead of only the selected one
        #[arg(long)]
        all: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    #[arg(long)]
    pub license_plate: String,

    #[arg(long)]
    pub vin: String,

    #[arg(long)]
    pub contract_number: String,

    #[arg(long)]
    pub source_stage: String,

    #[arg(long)]
    pub target_stage: String,

    /// Date of the movement (e.g. 2025-04-10)
    #[arg(long)]
    pub date_of_movement: String,

    /// Create, Update, or any other action label
    #[arg(long)]
    pub action: String,

    #[arg(long)]
    pub comment: Option<String>,
}
