use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cfpick")]
#[command(about = "Pick random Codeforces problems by topic and difficulty", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the problemset and show up to five random matching problems
    Pick {
        /// Topic to filter by (see `cfpick tags`); omit for all topics
        #[arg(short, long)]
        tag: Option<String>,

        /// Minimum difficulty rating (800-4000, multiple of 100)
        #[arg(long = "min", visible_alias = "from")]
        min_rating: Option<u32>,

        /// Maximum difficulty rating (800-4000, multiple of 100)
        #[arg(long = "max", visible_alias = "to")]
        max_rating: Option<u32>,

        /// Output format (defaults to the config file, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file to use instead of searching for .cfpick.toml
        #[arg(short, long, env = "CFPICK_CONFIG")]
        config: Option<PathBuf>,

        /// Plain output without colors
        #[arg(long)]
        plain: bool,

        /// Suppress the loading spinner
        #[arg(short, long)]
        quiet: bool,

        /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// List the topic labels accepted by --tag
    Tags,

    /// Show the rating system legend and helpful links
    Ratings {
        /// Plain output without colors
        #[arg(long)]
        plain: bool,
    },

    /// Write a starter .cfpick.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Write to the per-user config directory instead of the current one
        #[arg(long)]
        user: bool,
    },
}
