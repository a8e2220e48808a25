// ds-release: data-saver release helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Replaces the contents of `path` without exposing a partially written file.
///
/// The data goes to a sibling temporary file, which takes over the target's
/// permissions and is then renamed over it. A symlinked target is resolved
/// first, so the linked file is updated and the link itself survives. On
/// failure the temporary file is removed and the original stays intact.
///
/// # Example
/// ```no_run
/// use ds_release::utility::fs::write::write_atomic_async;
/// use std::path::Path;
///
/// # async fn example() -> std::io::Result<()> {
/// write_atomic_async(Path::new("README.md"), "# data-saver\n".to_string()).await?;
/// # Ok(())
/// # }
/// ```
/// # Errors
///
/// Returns an error if an existing target cannot be opened for writing, or
/// if the temporary file cannot be created, written, or renamed over it.
pub async fn write_atomic_async(path: &Path, contents: String) -> io::Result<()> {
    let target = resolve_target(path).await?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Removed on drop unless persisted
    let staged = NamedTempFile::new_in(dir)?;

    let mut file = fs::File::from_std(staged.reopen()?);
    file.write_all(contents.as_bytes()).await?;
    file.flush().await?;
    file.sync_all().await?;
    drop(file);

    match fs::metadata(&target).await {
        Ok(metadata) => fs::set_permissions(staged.path(), metadata.permissions()).await?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    staged.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

/// Follows symlinks of an existing target and checks it is writable.
///
/// A missing target is returned unchanged.
async fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    if !fs::try_exists(path).await? {
        return Ok(path.to_path_buf());
    }

    let target = fs::canonicalize(path).await?;
    // Same permission check a direct overwrite would hit
    fs::OpenOptions::new().write(true).open(&target).await?;
    Ok(target)
}
