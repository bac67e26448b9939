//! Type generator: picks the representative sample and calls the engine.

use serde_json::Value;

use crate::error::Result;
use crate::infer::{GeneratorOptions, InferenceEngine, JsonInference};

/// The sample used for inference: the first element of an array, or the
/// value itself. `None` for an empty array.
pub fn representative_sample(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.first(),
        other => Some(other),
    }
}

/// Wraps an [`InferenceEngine`] with the options every call should use.
#[derive(Debug, Clone, Default)]
pub struct TypeGenerator<E = JsonInference> {
    engine: E,
    options: GeneratorOptions,
}

impl TypeGenerator {
    /// Generator backed by the built-in engine with default options.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: InferenceEngine> TypeGenerator<E> {
    /// Generator backed by `engine`, rendering with `options`.
    pub fn with_engine(engine: E, options: GeneratorOptions) -> Self {
        Self { engine, options }
    }

    /// Options passed to every render.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Render TypeScript declarations for `type_name` from `sample`.
    pub fn generate(&self, sample: &Value, type_name: &str) -> Result<String> {
        let samples: Vec<Value> = representative_sample(sample).cloned().into_iter().collect();
        let source = self.engine.render(type_name, &samples, &self.options)?;
        Ok(source)
    }
}
