//! Menu-driven front-end over the `url` and `batch` commands.

use artgen_core::parse_path_list;
use artgen_core::validate;
use console::style;

use crate::commands::batch::{BatchArgs, generate_batch};
use crate::commands::url::{UrlArgs, generate_single};
use crate::common::run_cli_async;
use crate::prompt::{DialoguerPrompt, Prompt};

const MODES: [&str; 2] = ["🔗 Single API", "📦 Batch APIs"];

/// Run the interactive flow on the terminal, returning the exit code.
pub async fn run() -> i32 {
    run_cli_async(|| async {
        let mut prompt = DialoguerPrompt;
        run_with(&mut prompt).await
    })
    .await
}

/// Ask for a mode, then the questions of that mode, and generate.
pub async fn run_with<P: Prompt + ?Sized>(prompt: &mut P) -> Result<(), String> {
    println!("\n{}", style("🎯 Interactive type generator").bold());

    match prompt.select("Which generation mode?", &MODES, 0)? {
        0 => single(prompt).await,
        _ => batch(prompt).await,
    }
}

async fn single<P: Prompt + ?Sized>(prompt: &mut P) -> Result<(), String> {
    let api_url = prompt.input("API URL", None, Some(validate::url))?;
    let name = prompt.input("Type name (leave empty to derive it from the URL)", None, None)?;

    generate_single(
        UrlArgs {
            api_url: api_url.trim().to_string(),
            output: None,
            name: Some(name),
        },
        prompt,
    )
    .await
    .map(|_| ())
}

async fn batch<P: Prompt + ?Sized>(prompt: &mut P) -> Result<(), String> {
    let domain = prompt.input(
        "Base domain (e.g. https://api.example.com)",
        None,
        Some(validate::url),
    )?;
    let paths = prompt.input(
        "API paths, separated by commas or spaces (e.g. /users, /posts /comments)",
        None,
        Some(validate::required),
    )?;
    let prefix = prompt.input("Type name prefix (optional)", None, None)?;

    generate_batch(
        BatchArgs {
            domain: domain.trim().to_string(),
            paths: parse_path_list(&paths),
            output: None,
            prefix: prefix.trim().to_string(),
        },
        prompt,
    )
    .await
    .map(|_| ())
}
