//! Operator prompts.
//!
//! Every interactive question goes through [`Prompt`] so the flows can be
//! driven by a script in tests.

use dialoguer::{Input, Select};

/// Checks one answer; the message is shown next to the prompt.
pub type Validator = fn(&str) -> Result<(), String>;

/// Source of operator answers.
pub trait Prompt {
    /// Ask for a line of text.
    ///
    /// With a validator the prompt repeats until the answer passes it.
    /// Without one, an empty answer is accepted.
    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validator: Option<Validator>,
    ) -> Result<String, String>;

    /// Ask for one of `items`, returning its index.
    fn select(&mut self, message: &str, items: &[&str], default: usize) -> Result<usize, String>;
}

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompt;

impl Prompt for DialoguerPrompt {
    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validator: Option<Validator>,
    ) -> Result<String, String> {
        let mut input = Input::<String>::new().with_prompt(message);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input = match validator {
            Some(validate) => input.validate_with(move |value: &String| validate(value)),
            None => input.allow_empty(true),
        };
        input
            .interact_text()
            .map_err(|err| format!("Failed to read answer to \"{message}\": {err}"))
    }

    fn select(&mut self, message: &str, items: &[&str], default: usize) -> Result<usize, String> {
        Select::new()
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact()
            .map_err(|err| format!("Failed to read selection for \"{message}\": {err}"))
    }
}
