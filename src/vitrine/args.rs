use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

fn long_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    if GIT_HASH.is_empty() {
        VERSION
    } else {
        Box::leak(format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE).into_boxed_str())
    }
}

#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "Browse digital-asset catalogs from the command line", long_about = None)]
#[command(version, long_version = long_version())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to browse (defaults to ./.vitrine/catalog.json, then
    /// the per-user data directory)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Search query; supports chain:/blockchain:/type: tokens, #token-ids
    /// and "quoted phrases"
    #[arg(required = false)]
    pub query: Vec<String>,

    /// Keep only records on this chain (repeatable)
    #[arg(long = "chain", value_name = "CHAIN")]
    pub chains: Vec<String>,

    /// Keep only records in this collection (repeatable)
    #[arg(long = "collection", value_name = "COLLECTION")]
    pub collections: Vec<String>,

    /// Keep only records minted on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub minted_after: Option<NaiveDate>,

    /// Keep only records minted on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub minted_before: Option<NaiveDate>,

    /// Number of pages to load
    #[arg(long, default_value_t = 1, conflicts_with = "all")]
    pub pages: usize,

    /// Load every matching page
    #[arg(long)]
    pub all: bool,

    /// Skip the simulated fetch delay
    #[arg(long)]
    pub no_delay: bool,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            query: Vec::new(),
            chains: Vec::new(),
            collections: Vec::new(),
            minted_after: None,
            minted_before: None,
            pages: 1,
            all: false,
            no_delay: false,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the catalog with a search query and filters
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show full details for one or more records
    #[command(alias = "v")]
    Show {
        /// Record ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// List the collections present in the catalog
    Collections,

    /// List the chains present in the catalog
    Chains,

    /// Write the bundled starter catalog
    Init {
        /// Overwrite an existing catalog
        #[arg(long)]
        force: bool,
    },
}
