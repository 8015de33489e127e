//! Interactive prompts behind a small capability trait.
//!
//! The add command only ever needs a yes/no question and a single-select list.
//! Routing both through [`Prompter`] lets tests script the answers instead of
//! needing a terminal.

use crate::errors::Result;
use crate::log_debug;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

/// The two questions the add command can ask.
pub trait Prompter {
    /// Asks a yes/no question. `default` is used when the user just presses enter.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Lets the user pick one of `choices`. `None` means the user cancelled.
    fn select(&self, prompt: &str, choices: &[String]) -> Result<Option<String>>;
}

/// Prompts on the controlling terminal using `dialoguer`.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        log_debug!("[Prompt] '{}' -> {}", prompt, answer);
        Ok(answer)
    }

    fn select(&self, prompt: &str, choices: &[String]) -> Result<Option<String>> {
        // dialoguer refuses to render an empty list; nothing to pick means no pick.
        if choices.is_empty() {
            log_debug!("[Prompt] '{}' has no choices", prompt);
            return Ok(None);
        }

        let picked = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(choices)
            .default(0)
            .interact_opt()?;
        Ok(picked.map(|index| choices[index].clone()))
    }
}
