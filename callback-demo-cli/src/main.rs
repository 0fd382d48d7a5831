//! Callback Demo CLI Application
//!
//! Runs the callback dispatcher for a list of selectors (1, 2, 9 by default)
//! and prints each outcome the callback receives. It uses the callback-dispatch
//! library and adds:
//! - Banner/JSON rendering of each outcome
//! - Optional capture of the result into the caller's scope
//! - TOML configuration and command-line overrides

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

mod config;
mod driver;
mod report;

use config::AppConfig;
use driver::RunOptions;
use report::OutputFormat;

/// Callback Demo - Show error-first callbacks dispatched by selector
#[derive(Parser, Debug)]
#[command(name = "callback-demo-cli")]
#[command(about = "Dispatch selectors and print the (error, result) pair each callback receives", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Selector to dispatch (can be repeated; replaces the configured list)
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    selector: Vec<i64>,

    /// Print the value captured from inside each callback
    #[arg(long)]
    show_captured: bool,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::debug!("Callback Demo CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using dispatch library v{}", callback_dispatch::VERSION);

    let config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    let (selectors, options) = resolve_run(&args, &config);
    log::debug!("Running selectors {:?}", selectors);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    driver::run_all(&selectors, &mut out, options)?;

    Ok(())
}

/// Merge command-line overrides into the loaded configuration
fn resolve_run(args: &Args, config: &AppConfig) -> (Vec<i64>, RunOptions) {
    let selectors = if args.selector.is_empty() {
        config.run.selectors.clone()
    } else {
        args.selector.clone()
    };

    let options = RunOptions {
        format: args.format.unwrap_or(config.output.format),
        show_captured: args.show_captured || config.run.show_captured,
    };

    (selectors, options)
}

/// Initialize logging based on verbosity level
///
/// Logs go to stderr so stdout only carries the callback output.
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::{Builder, Target};
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
