//! JSON sample to TypeScript declaration inference.
//!
//! The pipeline is:
//! 1. Fold: JSON samples -> `Shape` (every observed kind per position)
//! 2. Codegen: `Shape` -> `TsModule` (named interfaces, aliases, enums)
//! 3. Emit: `TsModule` -> String (via the `Emit` trait)
//!
//! Callers only see the `InferenceEngine` trait and its options.

mod codegen;
mod emit;
mod shape;
mod types;
mod utils;

use serde_json::Value;

use codegen::codegen_module;
use emit::Emit;
use shape::Shape;

/// Rendering switches passed to the inference engine on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Sort interface properties by name.
    pub alphabetize_properties: bool,
    /// Render string enums as literal unions instead of `enum` declarations.
    pub prefer_unions: bool,
    /// Render a string that only ever held one value as that literal.
    pub prefer_const_values: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            alphabetize_properties: true,
            prefer_unions: true,
            prefer_const_values: true,
        }
    }
}

/// Failures reported by an inference engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferenceError {
    /// The engine was called without any sample.
    #[error("no samples were provided for type {type_name}")]
    NoSamples {
        /// Name of the type that was requested.
        type_name: String,
    },
    /// The requested type name was blank.
    #[error("type name must not be empty")]
    EmptyTypeName,
}

/// Turns example JSON documents into TypeScript source.
pub trait InferenceEngine {
    /// Render declarations for a type named `type_name` shaped like `samples`.
    fn render(
        &self,
        type_name: &str,
        samples: &[Value],
        options: &GeneratorOptions,
    ) -> Result<String, InferenceError>;
}

/// The built-in engine: merges samples into one shape and prints it.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonInference;

impl InferenceEngine for JsonInference {
    fn render(
        &self,
        type_name: &str,
        samples: &[Value],
        options: &GeneratorOptions,
    ) -> Result<String, InferenceError> {
        if type_name.trim().is_empty() {
            return Err(InferenceError::EmptyTypeName);
        }
        if samples.is_empty() {
            return Err(InferenceError::NoSamples {
                type_name: type_name.to_string(),
            });
        }

        let mut shape = Shape::default();
        for sample in samples {
            shape.observe(sample);
        }
        tracing::debug!(type_name, samples = samples.len(), "Rendering inferred shape.");
        Ok(codegen_module(type_name, &shape, options).emit())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_rejects_missing_samples() {
        let err = JsonInference
            .render("User", &[], &GeneratorOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            InferenceError::NoSamples {
                type_name: "User".into()
            }
        );
    }

    #[test]
    fn test_render_rejects_blank_name() {
        let err = JsonInference
            .render("  ", &[json!({"a": 1})], &GeneratorOptions::default())
            .unwrap_err();
        assert_eq!(err, InferenceError::EmptyTypeName);
    }

    #[test]
    fn test_multiple_samples_mark_missing_fields_optional() {
        let out = JsonInference
            .render(
                "User",
                &[json!({"id": 1, "nick": "a"}), json!({"id": 2})],
                &GeneratorOptions::default(),
            )
            .unwrap();
        assert!(out.contains("    nick?: string;\n"));
    }

    #[test]
    fn test_unsorted_properties_keep_observed_order() {
        let options = GeneratorOptions {
            alphabetize_properties: false,
            ..GeneratorOptions::default()
        };
        let out = JsonInference
            .render("Pair", &[json!({"b": 1}), json!({"a": 2})], &options)
            .unwrap();
        let b = out.find("b?:").unwrap();
        let a = out.find("a?:").unwrap();
        assert!(b < a);
    }
}
