//! Interactive prompts.

use anyhow::Result;
use dialoguer::{Confirm as ConfirmPrompt, Input, Select};
use storekeep_commerce::catalog::Confirm;

/// Confirmation through a terminal yes/no prompt.
///
/// A prompt that cannot be shown (no terminal) counts as a refusal.
pub struct DialoguerConfirm;

impl Confirm for DialoguerConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        match ConfirmPrompt::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "confirmation prompt failed");
                false
            }
        }
    }
}

/// Confirmation that always answers yes, for `--yes`.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Ask for non-blank text; re-prompts until it gets some.
pub fn text(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Value must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Ask for a positive whole number; re-prompts on invalid input.
pub fn positive_count(prompt: &str) -> Result<u32> {
    let value: u32 = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &u32| -> Result<(), &str> {
            if *input == 0 {
                Err("Please enter a number greater than zero")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value)
}

/// Ask for a positive price; re-prompts on invalid input.
pub fn price(prompt: &str) -> Result<f64> {
    let value: f64 = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &f64| -> Result<(), &str> {
            if input.is_finite() && *input > 0.0 {
                Ok(())
            } else {
                Err("Please enter a price greater than zero")
            }
        })
        .interact_text()?;
    Ok(value)
}

/// Ask for a menu choice between 1 and `max`; re-prompts otherwise.
pub fn menu_choice(max: u32) -> Result<u32> {
    let value: u32 = Input::new()
        .with_prompt("Enter your choice")
        .validate_with(move |input: &u32| -> Result<(), String> {
            if (1..=max).contains(input) {
                Ok(())
            } else {
                Err(format!("Please choose a number from 1 to {}", max))
            }
        })
        .interact_text()?;
    Ok(value)
}

/// Pick one item from a list.
pub fn select(prompt: &str, items: &[String]) -> Result<usize> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?;
    Ok(selection)
}
