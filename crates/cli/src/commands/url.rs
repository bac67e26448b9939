//! `art-gen url`: one endpoint, one file.

use std::path::PathBuf;

use artgen_core::{
    TypeGenerator, build_client, fetch_json, report_fetch_error, resolve_type_name, write_types,
};
use clap::Args;
use console::style;
use tracing::debug;

use crate::common::{parse_url, run_cli_async, spinner};
use crate::output::resolve_output_file;
use crate::prompt::{DialoguerPrompt, Prompt};

/// Generate TypeScript types from a single API URL
#[derive(Args, Debug, Clone)]
pub struct UrlArgs {
    /// The API endpoint returning the JSON sample.
    #[arg(
        value_name = "API_URL",
        value_parser = parse_url
    )]
    pub api_url: String,
    /// Output file path. Will prompt if not provided.
    #[arg(
        long,
        short = 'o',
        value_name = "FILE"
    )]
    pub output: Option<PathBuf>,
    /// Custom type name. Derived from the URL if not provided.
    #[arg(
        long,
        short = 'n',
        value_name = "TYPE_NAME"
    )]
    pub name: Option<String>,
}

/// Run `art-gen url`, returning the exit code.
pub async fn run(args: UrlArgs) -> i32 {
    run_cli_async(|| run_inner(args)).await
}

async fn run_inner(args: UrlArgs) -> Result<(), String> {
    let mut prompt = DialoguerPrompt;
    generate_single(args, &mut prompt).await.map(|_| ())
}

/// Fetch one endpoint, generate its types and write them to a single file.
///
/// Any failure aborts; the returned path is the written file.
pub async fn generate_single<P: Prompt + ?Sized>(
    args: UrlArgs,
    prompt: &mut P,
) -> Result<PathBuf, String> {
    let UrlArgs {
        api_url,
        output,
        name,
    } = args;

    println!("\n🔍 Fetching data from: {api_url}");
    let client = build_client().map_err(|err| err.to_string())?;
    let fetching = spinner("Fetching...");
    let fetched = fetch_json(&client, &api_url).await;
    fetching.finish_and_clear();
    let value = fetched.map_err(|err| {
        report_fetch_error(&api_url, &err);
        format!("No data received from {api_url}")
    })?;

    let type_name =
        resolve_type_name(name.as_deref(), &api_url).map_err(|err| err.to_string())?;
    println!("\n⚡ Generating TypeScript types for: {type_name}");

    let source = TypeGenerator::new()
        .generate(&value, &type_name)
        .map_err(|err| format!("❌ Error generating types for {api_url}: {err}"))?;

    let path = resolve_output_file(output, &type_name, prompt)?;
    debug!(path = %path.display(), "Writing single type file.");
    write_types(&path, &source).map_err(|err| format!("❌ {err}"))?;

    println!("\n{}", style("✅ Types generated successfully!").green());
    println!("📁 Output file: {}", path.display());
    Ok(path)
}
