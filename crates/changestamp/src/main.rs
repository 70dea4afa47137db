//! changestamp - stamp a changelog's pending section for release

mod cli;
mod exit_codes;

use std::path::PathBuf;

use clap::Parser;
use tracing::error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // The appender guard must be dropped before exiting so buffered logs flush
    let code = {
        let _guard = init_tracing(cli.verbose);
        match cli.execute() {
            Ok(()) => exit_codes::SUCCESS,
            Err(err) => {
                error!(error = %err, "changestamp failed");
                cli::output::error(&err.to_string());
                exit_codes::from_error(&err)
            }
        }
    };

    std::process::exit(code);
}

/// Set up tracing with two layers:
/// - Console (stderr): controlled by RUST_LOG (default: warn, `--verbose`: debug)
/// - File: always debug-level JSON to ~/.changestamp/logs/, when that directory is usable
fn init_tracing(verbose: bool) -> Option<WorkerGuard> {
    let console_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let (file_layer, guard) = match log_directory() {
        Some(log_dir) => {
            let appender = tracing_appender::rolling::daily(&log_dir, "changestamp.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_target(true)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

/// `~/.changestamp/logs`, created on first use
fn log_directory() -> Option<PathBuf> {
    let log_dir = dirs::home_dir()?.join(".changestamp").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;
    Some(log_dir)
}
