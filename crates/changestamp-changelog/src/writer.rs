//! File persistence for stamped changelogs and extracted sections

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use changestamp_core::error::ChangelogError;
use tempfile::NamedTempFile;
use tracing::debug;

/// Replace the contents of `path` with `content`.
///
/// With `atomic` set the content goes to a temporary file in the same
/// directory which is then renamed over `path`, so readers never observe a
/// half-written file. Otherwise the file is truncated and rewritten in place.
pub fn write_file(path: &Path, content: &str, atomic: bool) -> Result<(), ChangelogError> {
    let result = if atomic {
        write_atomic(path, content)
    } else {
        write_in_place(path, content)
    };

    result.map_err(|source| ChangelogError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = content.len(), atomic, "file written");
    Ok(())
}

/// Whether two paths name the same file once `..` and symlinks are resolved.
///
/// A path that does not exist yet is resolved through its parent directory,
/// so a future extract target can be compared against an existing changelog.
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (resolve(a), resolve(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

fn resolve(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = path.canonicalize() {
        return Some(resolved);
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Some(parent.canonicalize().ok()?.join(path.file_name()?))
}

fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;

    // Keep the mode of the file being replaced
    if let Ok(metadata) = std::fs::metadata(path) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }

    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn write_in_place(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}
