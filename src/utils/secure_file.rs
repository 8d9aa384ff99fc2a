//! Owner-only, atomic file writes for user settings.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `contents` to `path` through a temp file in the same directory, so a
/// reader never sees a half-written file. The file is 0600 on Unix.
///
/// # Example
/// ```rust,no_run
/// use vitality_source::utils::secure_file;
/// use std::path::Path;
///
/// secure_file::write_secure(Path::new("/tmp/preferences.json"), b"{\"dark_mode\":true}")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_secure(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory {}", parent.display()))?;

    let mut temp_file =
        NamedTempFile::new_in(parent).context("Failed to create temporary file")?;
    temp_file
        .write_all(contents)
        .context("Failed to write to temporary file")?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(temp_file.path())?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(temp_file.path(), perms).context("Failed to set file permissions")?;
    }

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file to {}", path.display()))?;

    Ok(())
}
