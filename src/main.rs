use clap::{Parser, Subcommand};
use colored::*;
use council_seats::commands::{info, report, ReportOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(about = "Municipal council seat apportionment")]
struct Opts {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate and dump info about an election snapshot.
    Info {
        /// Election snapshot (.json or .json.gz)
        input: PathBuf,
        /// Council seats to distribute, overriding the snapshot
        #[clap(long)]
        seats: Option<u32>,
    },
    /// Allocate council seats and resolve the elected candidates.
    Report {
        /// Election snapshot (.json or .json.gz)
        input: PathBuf,
        /// Council seats to distribute, overriding the snapshot
        #[clap(long)]
        seats: Option<u32>,
        /// Print the report as JSON instead of a table
        #[clap(long)]
        json: bool,
        /// Write the JSON report to this path
        #[clap(long)]
        output: Option<PathBuf>,
        /// Also print the seat award order
        #[clap(long)]
        trace: bool,
    },
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let opts = Opts::parse();
    init_logging(opts.verbose);

    let outcome = match opts.command {
        Command::Info { input, seats } => info(&input, seats),
        Command::Report {
            input,
            seats,
            json,
            output,
            trace,
        } => report(
            &input,
            &ReportOptions {
                seats,
                json,
                output,
                trace,
            },
        ),
    };

    if let Err(e) = outcome {
        eprintln!("{} {}", "❌".red(), e);
        std::process::exit(1);
    }
}
