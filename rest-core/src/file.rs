use std::path::Path;

use eyre::{Context, Result};

/// Write `content` to `path`, creating any missing parent directories.
///
/// Existing files are replaced. Callers decide beforehand whether a write
/// is allowed; this function never checks.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}
