//! Core of art-gen: fetch JSON from HTTP endpoints and turn it into
//! TypeScript declarations.
//!
//! This crate has no terminal interaction beyond plain progress lines; the
//! prompts and the command surface live in `artgen-cli`.

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

pub mod batch;
pub mod error;
pub mod fetch;
pub mod generate;
pub mod infer;
pub mod output;
pub mod sanitize;
pub mod validate;

pub use batch::{BatchOutcome, BatchReport, BatchRequest, join_url, parse_path_list, run_batch};
pub use error::{ArtGenError, Result};
pub use fetch::{build_client, fetch_json, fetch_or_report, report_fetch_error};
pub use generate::{TypeGenerator, representative_sample};
pub use infer::{GeneratorOptions, InferenceEngine, InferenceError, JsonInference};
pub use output::{ensure_output_dir, type_file_name, write_types};
pub use sanitize::{resolve_type_name, sanitize_type_name};
