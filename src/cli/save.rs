//! Save-to-file flow for the hex-encoded envelope

use std::fs;
use std::path::Path;

use super::prompt::{confirm, prompt_line, ConfirmOptions};
use crate::error::Result;

/// Write the hex string as the entire content of the file.
///
/// Missing parent directories are created. The content is exactly the hex
/// string, UTF-8, with nothing appended.
pub fn write_hex_file(path: &Path, hex_output: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, hex_output)?;
    Ok(())
}

/// Interactive save flow for an encrypted envelope.
///
/// Prompts for a destination path. An empty path cancels the save; a path
/// that is a directory is refused; an existing file requires overwrite
/// confirmation. Refusals and declined overwrites re-prompt, so cancelling
/// stays available via the empty path.
pub fn save_flow(hex_output: &str) -> Result<()> {
    loop {
        let input = prompt_line("File path (empty to cancel): ")?;
        let input = input.trim();

        if input.is_empty() {
            println!("Save cancelled.");
            return Ok(());
        }

        let path = Path::new(input);

        if path.is_dir() {
            println!("'{}' is a directory. Please enter a file path.", input);
            continue;
        }

        if path.exists()
            && !confirm(
                "File already exists. Overwrite? (yes/no): ",
                &ConfirmOptions::default(),
            )?
        {
            continue;
        }

        write_hex_file(path, hex_output)?;
        println!("Saved to '{}'.", input);
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_hex_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("envelope.hex");

        write_hex_file(&path, "deadbeef0123").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "deadbeef0123");
    }

    #[test]
    fn test_write_hex_file_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("envelope.hex");

        write_hex_file(&path, "cafe").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "cafe");
    }

    #[test]
    fn test_write_hex_file_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("envelope.hex");

        write_hex_file(&path, "old").unwrap();
        write_hex_file(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_hex_file_relative_no_parent() {
        let temp_dir = TempDir::new().unwrap();
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(temp_dir.path()).unwrap();

        // A bare filename has an empty parent; no directory creation needed
        let result = write_hex_file(Path::new("bare.hex"), "0a0b");
        std::env::set_current_dir(original).unwrap();

        result.unwrap();
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("bare.hex")).unwrap(),
            "0a0b"
        );
    }
}
