use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Project root the plan runs against. `None` means the current working
/// directory; an explicit root is tilde-expanded and must name an existing
/// directory.
pub(crate) fn resolve_root(root: Option<&str>) -> Result<PathBuf> {
    let path = match root {
        None => env::current_dir().map_err(|e| {
            Error::internal_io(
                e.to_string(),
                Some("resolving current working directory".to_string()),
            )
        })?,
        Some(raw) => {
            // Expand tilde to home directory (e.g., ~/work/app -> /home/dev/work/app)
            let expanded = shellexpand::tilde(raw);
            PathBuf::from(expanded.as_ref())
        }
    };

    if !path.exists() {
        return Err(Error::validation_invalid_argument(
            "root",
            format!("Project root does not exist: {}", path.display()),
            root.map(|r| r.to_string()),
        )
        .with_hint(format!("Verify the path exists: ls -la {}", path.display())));
    }

    if !path.is_dir() {
        return Err(Error::validation_invalid_argument(
            "root",
            format!("Project root is not a directory: {}", path.display()),
            root.map(|r| r.to_string()),
        )
        .with_hint("Pass the project directory itself, not a file inside it"));
    }

    Ok(path)
}
