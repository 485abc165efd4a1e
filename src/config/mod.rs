pub mod proxy;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "seamless-chat")]
#[command(about = "Inspect and validate seamless chat data")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML config with [backend], [proxy] and [logging]")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    Message,
    User,
    Room,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the supported language catalog
    Languages {
        #[arg(long)]
        json: bool,
    },
    /// Validate a JSON record (or an array of them) against the data contract
    Validate {
        #[arg(value_enum)]
        kind: RecordKind,
        file: PathBuf,
    },
    /// Show where the dev proxy forwards a request path
    Rewrite { path: String },
    /// Show the translation request needed to deliver a message in another language
    Plan {
        message_file: PathBuf,
        #[arg(long = "to")]
        target_lang: String,
    },
}
