//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read file contents, wrapping `fs::read_to_string` with `Error::internal_io`
/// formatting. The `operation` string lands in the error details as context.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Write content to file, wrapping `fs::write` with `Error::internal_io`
/// formatting. Writes in place; a failure can leave the file truncated.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "export const users = pgTable(").unwrap();

        let content = read_file(temp.path(), "read schema").unwrap();
        assert!(content.contains("pgTable"));
    }

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/schema.ts"), "read schema");
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn write_file_replaces_contents() {
        let temp = NamedTempFile::new().unwrap();
        write_file(temp.path(), "export const appUsers = pgTable(", "write schema").unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert_eq!(content, "export const appUsers = pgTable(");
    }

    #[test]
    fn write_file_returns_error_for_invalid_path() {
        let result = write_file(
            Path::new("/nonexistent/dir/types.ts"),
            "content",
            "write types",
        );
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }
}
