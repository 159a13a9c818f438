use inquire::{Confirm, InquireError};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("Error occurred trying to prompt user")]
    #[diagnostic(
        code(session_scaffold::prompt::inquire),
        help("Run without --interactive when no terminal is attached")
    )]
    Inquire(#[from] InquireError),
}

/// Asks whether the previewed files should be written. Escape counts as "no".
pub fn apply_changes() -> Result<bool, PromptError> {
    let answer = Confirm::new("Write these files?")
        .with_default(true)
        .with_help_message("Existing files at these paths will be overwritten")
        .prompt_skippable()?;

    Ok(answer.unwrap_or(false))
}
