//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::Confirm;
use std::path::PathBuf;

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Prompt user to confirm overwriting output files that already exist
pub fn confirm_overwrite(existing: &[PathBuf]) -> Result<bool> {
    let message = if existing.len() == 1 {
        format!("Overwrite existing file {}?", existing[0].display())
    } else {
        format!("Overwrite {} existing output file(s)?", existing.len())
    };
    confirm_step(&message)
}
