//! Terminal prompts: masked double-entry inputs and yes/no confirmation

use std::io::{self, BufRead, Write};

use crate::error::Result;
use crate::PASSWORD_WARN_LENGTH;

/// Options for the yes/no confirmation prompt
#[derive(Debug, Clone)]
pub struct ConfirmOptions {
    /// Inputs treated as affirmative (matched case-insensitively)
    pub accepted: Vec<String>,
}

impl Default for ConfirmOptions {
    fn default() -> Self {
        Self {
            accepted: vec!["yes".to_string(), "y".to_string()],
        }
    }
}

/// Check whether an input line counts as affirmative.
///
/// The input is trimmed and compared case-insensitively against the accepted
/// tokens; anything else is negative.
pub fn is_affirmative(input: &str, options: &ConfirmOptions) -> bool {
    let answer = input.trim();
    options
        .accepted
        .iter()
        .any(|token| token.eq_ignore_ascii_case(answer))
}

/// Ask a yes/no question on the terminal.
pub fn confirm(prompt: &str, options: &ConfirmOptions) -> Result<bool> {
    let line = prompt_line(prompt)?;
    Ok(is_affirmative(&line, options))
}

/// Print a prompt and read one line from stdin.
pub fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Prompt for a password with masked double entry.
///
/// Both entries must match before proceeding. A password shorter than
/// 8 characters gets a soft warning and an explicit confirmation - declining
/// re-prompts rather than aborting.
pub fn prompt_password() -> Result<String> {
    loop {
        let first = rpassword::prompt_password("Enter password: ")?;
        let second = rpassword::prompt_password("Confirm password: ")?;

        if first != second {
            println!("Passwords do not match. Please try again.");
            continue;
        }

        if first.chars().count() < PASSWORD_WARN_LENGTH {
            println!(
                "Warning: password is shorter than {} characters and gives a weak key.",
                PASSWORD_WARN_LENGTH
            );
            if !confirm("Use it anyway? (yes/no): ", &ConfirmOptions::default())? {
                continue;
            }
        }

        return Ok(first);
    }
}

/// Prompt for the secret message with masked double entry.
pub fn prompt_message() -> Result<String> {
    loop {
        let first = rpassword::prompt_password("Enter secret message: ")?;
        let second = rpassword::prompt_password("Confirm secret message: ")?;

        if first != second {
            println!("Messages do not match. Please try again.");
            continue;
        }

        return Ok(first);
    }
}
