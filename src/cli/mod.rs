//! Interactive terminal flow for sealing a secret
//!
//! Walks the user through a double-entry password prompt, a double-entry
//! secret prompt, prints the hex-encoded envelope and optionally saves it to
//! a file. The plaintext secret is never written to disk - only the encrypted
//! hex output may be saved.

pub mod prompt;
pub mod save;

pub use prompt::{confirm, is_affirmative, prompt_message, prompt_password, ConfirmOptions};
pub use save::{save_flow, write_hex_file};

use crate::crypto::encrypt;
use crate::error::Result;

/// Run the interactive sealing flow.
///
/// Any failure (closed input stream, write error, random-source failure) is
/// returned to the caller; the binary prints it and exits non-zero.
pub fn run() -> Result<()> {
    println!("envseal - seal a secret without writing plaintext to disk");
    println!();

    let password = prompt_password()?;
    let message = prompt_message()?;

    let envelope = encrypt(message.as_bytes(), password.as_bytes())?;
    let encoded = hex::encode(&envelope);

    println!();
    println!("Encrypted envelope (hex):");
    println!("{}", encoded);
    println!();

    if confirm("Save to a file? (yes/no): ", &ConfirmOptions::default())? {
        save_flow(&encoded)?;
    }

    Ok(())
}
