use std::path::PathBuf;
use std::sync::OnceLock;

use clap::{Parser, Subcommand};

/// "0.1.0" for tagged builds, "0.1.0@abc1234" otherwise.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "blueprint", bin_name = "blueprint", version = get_version())]
#[command(about = "Blueprint tags, videos, relative times and profile listings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (TOML), layered over the user config and defaults
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize a tags textarea (one tag per line)
    Tags {
        /// File to read; stdin when omitted
        file: Option<PathBuf>,

        /// JSON list of existing tags ({id, name, slug}) to reuse ids from
        #[arg(long, value_name = "JSON")]
        dictionary: Option<PathBuf>,
    },

    /// Resolve a video link into an embed URL
    Video {
        input: String,
    },

    /// Relative time since a timestamp ("YYYY-MM-DD HH:MM:SS" UTC or RFC 3339)
    Since {
        timestamp: String,

        /// Reference time instead of the current time
        #[arg(long)]
        now: Option<String>,
    },

    /// Compute a page window and its navigation links
    Paginate {
        #[arg(long)]
        total: u64,

        #[arg(long, default_value_t = 1)]
        page: u64,

        /// Defaults to the configured page size
        #[arg(long)]
        page_size: Option<u64>,
    },

    /// List a user's blueprints from a JSON store snapshot
    Profile {
        username: String,

        /// Snapshot with `users`, `blueprints` and `tags`
        #[arg(long, value_name = "JSON")]
        data: PathBuf,

        /// Id of the user looking at the profile
        #[arg(long)]
        viewer: Option<u64>,

        #[arg(long)]
        page: Option<String>,
    },

    /// Show the effective configuration
    Config {
        /// Print a commented TOML template instead
        #[arg(long)]
        template: bool,
    },
}
