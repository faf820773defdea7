use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use sortviz_core::{AlgorithmKind, SortOrder};

use crate::commands::explore::{ExploreArgs, run_explore};
use crate::commands::info::{InfoArgs, run_info};
use crate::commands::play::{PlayArgs, run_play};
use crate::commands::trace::{TraceArgs, run_trace};
use crate::error::Result;
use crate::logging;

#[derive(Debug, Parser)]
#[command(
    name = "sortviz",
    about = "Step through bubble and insertion sort one comparison at a time",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags accepted by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Playback config file (`.toml` or `.json`).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log output format on stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every step of a sort.
    Trace(TraceArgs),

    /// Auto-play a sort in the terminal.
    Play(PlayArgs),

    /// Step through a sort interactively, reading commands from stdin.
    Explore(ExploreArgs),

    /// Show pseudocode and complexity.
    Info(InfoArgs),
}

/// Array and algorithm selection shared by the playback commands.
#[derive(Debug, Clone, Args)]
pub struct ArrayArgs {
    /// Algorithm to run.
    #[arg(long, short = 'a', value_enum, default_value_t = AlgorithmArg::Bubble)]
    pub algorithm: AlgorithmArg,

    /// Target order; overrides the config file.
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// Comma-separated values (1-999, at most 15).
    #[arg(long, value_name = "LIST", allow_hyphen_values = true)]
    pub values: Option<String>,

    /// Size of the random array when --values is absent.
    #[arg(long)]
    pub size: Option<usize>,

    /// Seed for reproducible random arrays.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Bubble,
    Insertion,
}

impl AlgorithmArg {
    #[must_use]
    pub fn kind(self) -> AlgorithmKind {
        match self {
            Self::Bubble => AlgorithmKind::Bubble,
            Self::Insertion => AlgorithmKind::Insertion,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortOrder::Ascending,
            OrderArg::Desc => SortOrder::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.global)?;
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Trace(args) => run_trace(&cli.global, &args, &mut out),
        Commands::Play(args) => run_play(&cli.global, &args, &mut out),
        Commands::Explore(args) => {
            let stdin = std::io::stdin();
            run_explore(&cli.global, &args, stdin.lock(), &mut out)
        }
        Commands::Info(args) => run_info(&args, &mut out),
    }
}
