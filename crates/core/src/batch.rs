//! Batch generation over one domain and many paths.
//!
//! Items are processed strictly one after another. A failed fetch, an
//! unusable name, a failed generation or a failed write only skips that
//! item; the report lists what succeeded.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::fetch::fetch_or_report;
use crate::generate::TypeGenerator;
use crate::infer::InferenceEngine;
use crate::output::{ensure_output_dir, type_file_name, write_types};
use crate::sanitize::sanitize_type_name;

/// Inputs of one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchRequest {
    /// Base URL, e.g. `https://api.example.com`.
    pub domain: String,
    /// Paths appended to the domain, with or without a leading slash.
    pub paths: Vec<String>,
    /// Prepended to every derived type name.
    pub prefix: String,
}

/// One successfully written file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Path as given by the operator.
    pub path: String,
    /// File the declarations were written to.
    pub file: PathBuf,
    /// Name of the root declaration.
    pub type_name: String,
}

/// Summary of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Directory every file was written into.
    pub output_dir: PathBuf,
    /// Number of paths in the request.
    pub attempted: usize,
    /// Successful items, in request order.
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    /// Number of files written.
    pub fn succeeded(&self) -> usize {
        self.outcomes.len()
    }

    /// Print the closing summary for the operator.
    pub fn print_summary(&self) {
        println!("\n🎉 Batch generation complete!");
        println!(
            "📊 Successfully generated {}/{} type files",
            self.succeeded(),
            self.attempted
        );
        println!("📁 Output directory: {}", self.output_dir.display());

        if !self.outcomes.is_empty() {
            println!("\n📝 Generated files:");
            for outcome in &self.outcomes {
                println!("  • {} ({})", outcome.file.display(), outcome.type_name);
            }
        }
    }
}

/// Join a domain and a path with a `/` between them.
///
/// One trailing slash is removed from the domain and one leading slash from
/// the path; the rest of either is kept as typed.
pub fn join_url(domain: &str, path: &str) -> String {
    let domain = domain.strip_suffix('/').unwrap_or(domain);
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{domain}/{path}")
}

/// Split operator input like `/users, /posts /comments` into paths.
pub fn parse_path_list(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fetch, generate and write every path of `request` into `output_dir`.
///
/// Only failing to create `output_dir` aborts the run.
pub async fn run_batch<E: InferenceEngine>(
    client: &reqwest::Client,
    generator: &TypeGenerator<E>,
    request: &BatchRequest,
    output_dir: &Path,
) -> Result<BatchReport> {
    ensure_output_dir(output_dir)?;

    let mut outcomes = Vec::new();
    for path in &request.paths {
        if let Some(outcome) = process_item(client, generator, request, path, output_dir).await {
            outcomes.push(outcome);
        }
    }

    info!(
        succeeded = outcomes.len(),
        attempted = request.paths.len(),
        "Batch generation finished."
    );
    Ok(BatchReport {
        output_dir: output_dir.to_path_buf(),
        attempted: request.paths.len(),
        outcomes,
    })
}

async fn process_item<E: InferenceEngine>(
    client: &reqwest::Client,
    generator: &TypeGenerator<E>,
    request: &BatchRequest,
    path: &str,
    output_dir: &Path,
) -> Option<BatchOutcome> {
    let url = join_url(&request.domain, path);
    println!("\n📡 Fetching: {url}");

    let Some(value) = fetch_or_report(client, &url).await else {
        println!("⚠️  Skipping {url} due to fetch error");
        return None;
    };

    let type_name = format!("{}{}", request.prefix, sanitize_type_name(path));
    if type_name.is_empty() {
        eprintln!("❌ Could not derive a type name from {path}, skipping");
        return None;
    }
    println!("⚡ Generating types for: {type_name}");

    let source = match generator.generate(&value, &type_name) {
        Ok(source) => source,
        Err(err) => {
            debug!(%path, error = %err, "Generation failed.");
            eprintln!("❌ Error generating types for {path}: {err}");
            return None;
        }
    };

    let file_name = type_file_name(&type_name);
    let file = output_dir.join(&file_name);
    if let Err(err) = write_types(&file, &source) {
        eprintln!("❌ Error writing types for {path}: {err}");
        return None;
    }
    println!("✅ Generated: {file_name}");

    Some(BatchOutcome {
        path: path.to_string(),
        file,
        type_name,
    })
}
