//! pcinfo - Host inventory report.
//!
//! Collects OS, CPU and disk inventory with the platform's native utilities
//! and prints a text report to stdout.
//!
//! Usage:
//!   pcinfo          # print the report
//!   pcinfo -v       # with debug logging
//!   pcinfo -q       # errors only

use clap::Parser;
use tracing::{Level, error};
use tracing_subscriber::EnvFilter;

/// Host inventory report.
#[derive(Parser)]
#[command(name = "pcinfo", about = "Host inventory report", version)]
struct Args {
    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log errors only.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Initializes the tracing subscriber with the appropriate log level.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("pcinfo={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    match pcinfo::collector::collect() {
        Ok(info) => println!("{}", info),
        Err(e) => {
            error!("collection failed: {}", e);
            std::process::exit(1);
        }
    }
}
