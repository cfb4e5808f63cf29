//! fixgen CLI - test-network fixture generation.

use clap::{Args, Parser, Subcommand};
use fixgen_accounts::{PartitionNaming, PartitionPlan};
use fixgen_genesis::{MergeJob, MergeOptions};
use fixgen_types::Balance;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::CliError;
use config::FixgenConfig;

/// fixgen - generate accounts, split them into partitions and fund them in genesis
#[derive(Parser, Debug)]
#[command(name = "fixgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML config file (default: fixgen.yaml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate random account records
    Generate(GenerateArgs),

    /// Split an account file into partition files
    Split(SplitArgs),

    /// Append partition accounts to a genesis template
    Merge(MergeArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of accounts
    #[arg(short = 'n', long)]
    count: Option<u64>,

    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SplitArgs {
    /// Account file to split
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Number of partition files
    #[arg(short, long, conflicts_with = "chunk_size")]
    groups: Option<usize>,

    /// Records per partition file
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Output directory
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Partition file stem (files are named <stem><n>.json)
    #[arg(long)]
    stem: Option<String>,
}

#[derive(Args, Debug)]
struct MergeArgs {
    /// Partition file, repeatable, read in the given order
    #[arg(short, long = "partition")]
    partitions: Vec<PathBuf>,

    /// Genesis template
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output genesis file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Balance per account (decimal integer)
    #[arg(short, long)]
    balance: Option<String>,

    /// Fail on records without an address
    #[arg(long)]
    strict: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("fixgen={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> commands::Result<()> {
    let config = FixgenConfig::load(cli.config.as_deref()).map_err(CliError::Config)?;

    match cli.command {
        Commands::Generate(args) => {
            let count = args.count.unwrap_or(config.generate.count);
            let output = args.output.unwrap_or(config.generate.output);
            commands::generate(count, &output)
        }
        Commands::Split(args) => {
            let split = config.split;
            let plan = match (args.groups, args.chunk_size.or(split.chunk_size)) {
                (Some(groups), _) => PartitionPlan::Groups(groups),
                (None, Some(chunk)) => PartitionPlan::ChunkSize(chunk),
                (None, None) => PartitionPlan::Groups(split.groups),
            };
            let naming = PartitionNaming::new(
                args.dir.unwrap_or(split.dir),
                args.stem.unwrap_or(split.stem),
            );
            let input = args.input.unwrap_or(split.input);
            commands::split(&input, plan, &naming).map(|_| ())
        }
        Commands::Merge(args) => {
            let merge = config.merge;
            let balance: Balance = args
                .balance
                .as_deref()
                .unwrap_or(merge.balance.as_str())
                .parse()
                .map_err(|e: fixgen_types::ParseBalanceError| CliError::Config(e.to_string()))?;

            let job = MergeJob {
                partitions: if args.partitions.is_empty() {
                    merge.partitions
                } else {
                    args.partitions
                },
                template: args.template.unwrap_or(merge.template),
                output: args.output.unwrap_or(merge.output),
            };
            let options = MergeOptions {
                naming: merge.naming,
                balance,
                strict: args.strict || merge.strict,
            };
            commands::merge(&job, options).map(|_| ())
        }
    }
}
