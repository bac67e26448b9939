//! `art-gen batch`: many paths of one API into one directory.

use std::path::PathBuf;

use artgen_core::{BatchReport, BatchRequest, TypeGenerator, build_client, run_batch};
use clap::Args;

use crate::common::{parse_url, run_cli_async};
use crate::output::resolve_output_dir;
use crate::prompt::{DialoguerPrompt, Prompt};

/// Generate TypeScript types for several paths of one API
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Base URL the paths are appended to, e.g. https://api.example.com.
    #[arg(
        value_name = "DOMAIN",
        value_parser = parse_url
    )]
    pub domain: String,
    /// API paths to generate types for, e.g. /users /posts.
    #[arg(
        value_name = "PATHS",
        required = true,
        num_args = 1..
    )]
    pub paths: Vec<String>,
    /// Output directory. Will prompt if not provided.
    #[arg(
        long,
        short = 'o',
        value_name = "DIR"
    )]
    pub output: Option<PathBuf>,
    /// Prefix prepended to every type name.
    #[arg(
        long,
        short = 'p',
        default_value = ""
    )]
    pub prefix: String,
}

/// Run `art-gen batch`, returning the exit code.
pub async fn run(args: BatchArgs) -> i32 {
    run_cli_async(|| run_inner(args)).await
}

async fn run_inner(args: BatchArgs) -> Result<(), String> {
    let mut prompt = DialoguerPrompt;
    generate_batch(args, &mut prompt).await.map(|_| ())
}

/// Generate one file per path. Failed paths are skipped; only a prompt
/// failure or an unusable output directory is an error.
pub async fn generate_batch<P: Prompt + ?Sized>(
    args: BatchArgs,
    prompt: &mut P,
) -> Result<BatchReport, String> {
    let request = BatchRequest {
        domain: args.domain,
        paths: args.paths,
        prefix: args.prefix,
    };
    println!(
        "\n🔍 Processing {} endpoints from domain: {}",
        request.paths.len(),
        request.domain
    );

    let output_dir = resolve_output_dir(args.output, prompt)?;
    let client = build_client().map_err(|err| err.to_string())?;
    let report = run_batch(&client, &TypeGenerator::new(), &request, &output_dir)
        .await
        .map_err(|err| format!("❌ {err}"))?;

    report.print_summary();
    Ok(report)
}
