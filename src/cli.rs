//! Command-line interface for xmltract.

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::config::{resolve_encoding, DEFAULT_ENCODING};
use crate::criteria::MatchCriteria;
use crate::error::Result;
use crate::extract::{self, ExtractOptions, FailurePolicy, TraversalMode};

/// Extract content for a particular element (name) from XML.
#[derive(Parser)]
#[command(name = "xmltract")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Target element local name
    pub name: String,

    /// Input files (default: read standard input)
    pub infiles: Vec<PathBuf>,

    /// Input encoding label
    #[arg(short, long, default_value = DEFAULT_ENCODING)]
    pub encoding: String,

    /// Match this namespace prefix, too
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Ignore case of name (and prefix)
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Traversal strategy
    #[arg(long, value_enum, default_value_t = Mode::Stream)]
    pub mode: Mode,

    /// Continue past a failed input instead of aborting the batch
    #[arg(long)]
    pub keep_going: bool,

    /// Quiet logging (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose logging (repeat for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Traversal strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Single-pass scan capturing each match's immediate text
    Stream,
    /// Retained-subtree walk capturing each match's full descendant text
    Tree,
}

impl From<Mode> for TraversalMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Stream => TraversalMode::Stream,
            Mode::Tree => TraversalMode::Tree,
        }
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let encoding = resolve_encoding(&cli.encoding)?;
    let criteria = MatchCriteria::new(&cli.name, cli.prefix.clone(), cli.ignore_case);

    if cli.ignore_case {
        tracing::info!(name = criteria.name(), "matching ignoring case");
    } else {
        tracing::info!(name = criteria.name(), "matching case sensitive");
    }

    let options = ExtractOptions {
        mode: cli.mode.into(),
        policy: if cli.keep_going {
            FailurePolicy::KeepGoing
        } else {
            FailurePolicy::FailFast
        },
        encoding,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    extract::run(&criteria, &cli.infiles, &options, &mut out)
}

/// Initialize tracing with the verbosity chosen on the command line,
/// respecting RUST_LOG. Logs go to stderr so they never mix with
/// extracted output.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
