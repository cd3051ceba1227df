//! # fwset CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

use fwset_cli::check::{self, CheckArgs};
use fwset_cli::describe::{self, DescribeArgs};

/// Firmware setting validation.
///
/// Checks requested BIOS setting writes against a firmware schema before
/// they are applied to a machine.
#[derive(Parser, Debug)]
#[command(name = "fwset", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate NAME=VALUE setting writes against a schema.
    Check(CheckArgs),
    /// Summarize a firmware schema.
    Describe(DescribeArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => {
            let report = check::run_check(&args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render_text());
            }
            if !report.all_accepted() {
                anyhow::bail!(
                    "{} of {} settings rejected",
                    report.rejected_count(),
                    report.outcomes.len()
                );
            }
        }
        Commands::Describe(args) => {
            let summary = describe::run_describe(&args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", summary.render_text());
            }
        }
    }

    Ok(())
}
