use crate::types::{LogLevel, OutputFormat, StyleArg, TierArg};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "humanizer")]
#[command(
    about = "Rewrite text to read less machine-generated, within your plan's word limit",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Data directory (default: $HUMANIZER_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Humanize text from a file or stdin and show before/after results
    Humanize(HumanizeArgs),

    /// Show word usage against the plan limit without transforming
    Gate(GateArgs),

    /// List saved results, newest first
    History {
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct TierArgs {
    /// Subscription tier (overrides config)
    #[arg(long)]
    pub tier: Option<TierArg>,

    /// Word limit for the tier (overrides config)
    #[arg(long)]
    pub word_limit: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct HumanizeArgs {
    /// Read text from this file instead of stdin
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Humanization level, 0-100
    #[arg(long, allow_negative_numbers = true)]
    pub level: Option<i32>,

    #[arg(long)]
    pub style: Option<StyleArg>,

    /// Allow rewriting of sentences holding key points
    #[arg(long)]
    pub no_preserve_key_points: bool,

    #[command(flatten)]
    pub tier: TierArgs,

    /// Seed the random source for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulated service latency (overrides config)
    #[arg(long)]
    pub latency_ms: Option<u64>,

    /// Save the result to history
    #[arg(long)]
    pub save: bool,

    /// Print only the humanized text, verbatim
    #[arg(long)]
    pub copy: bool,
}

#[derive(Args, Debug, Clone)]
pub struct GateArgs {
    /// Read text from this file instead of stdin
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub tier: TierArgs,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
