//! Command surface of art-gen: argument parsing, prompts and console output.

#![forbid(unsafe_code)]
#![deny(warnings, unused_must_use, dead_code, missing_debug_implementations)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod banner;
pub mod commands;
mod common;
pub mod interactive;
mod output;
mod prompt;

pub use common::run_cli_async;
pub use prompt::{DialoguerPrompt, Prompt};

const LOG_ENV: &str = "ARTGEN_LOG";
const LOG_TARGETS: [&str; 2] = ["artgen_core", "artgen_cli"];
const DEFAULT_LEVEL: &str = "warn";

#[derive(Parser, Debug)]
#[command(
    name = "art-gen",
    version,
    about = "Generate TypeScript interface definitions from JSON APIs ✈️"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 🎯 Start the interactive type generator
    #[command(visible_alias = "i")]
    Interactive,
    /// 🔗 Generate TypeScript types from a single API URL
    Url(commands::url::UrlArgs),
    /// 📦 Generate TypeScript types for several paths of one API
    Batch(commands::batch::BatchArgs),
}

/// Parse `args` (including the program name) and run the chosen command.
/// Returns the process exit code.
pub async fn run(args: Vec<String>) -> i32 {
    init_tracing();
    banner::print_banner();

    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.command {
            Some(Commands::Interactive) => interactive::run().await,
            Some(Commands::Url(args)) => commands::url::run(args).await,
            Some(Commands::Batch(args)) => commands::batch::run(args).await,
            None => {
                banner::print_welcome();
                interactive::run().await
            }
        },
        Err(e) => {
            let code = e.exit_code();
            if let Err(err) = e.print() {
                tracing::debug!(error = %err, "Failed to print usage error.");
            }
            code
        }
    }
}

pub(crate) fn init_tracing() {
    // ARTGEN_LOG takes a plain level ("debug") or a full filter spec
    // like "artgen_core=trace,reqwest=debug"
    let filter = filter_spec(std::env::var(LOG_ENV).ok());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn filter_spec(value: Option<String>) -> String {
    match value {
        Some(level) if is_plain_level(&level) => per_crate(&level.to_ascii_lowercase()),
        Some(spec) if !spec.trim().is_empty() => spec,
        _ => per_crate(DEFAULT_LEVEL),
    }
}

fn per_crate(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
